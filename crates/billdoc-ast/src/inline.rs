//! Inline elements for bill content
//!
//! This module defines the rich-text layer of a bill: raw text runs mixed
//! with formatting and reference markup such as sponsor names, cross
//! references and added/deleted phrases.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::UnsupportedElement;

/// A mixture of raw text and markup elements that combine into a rich-text
/// string.
///
/// Adjacent text runs are kept exactly as they appeared in the source; they
/// are never merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineMarkup(pub Vec<Inline>);

/// Inline-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    /// Raw text between and within markup
    Text(String),
    /// `added-phrase`
    AddedPhrase(InlineMarkup),
    /// `act-name`
    ActName(InlineMarkup),
    /// `bold`
    Bold(InlineMarkup),
    /// `committee-name`
    CommitteeName(CommitteeName),
    /// `cosponsor`
    Cosponsor(MemberName),
    /// `definition`
    Definition(InlineMarkup),
    /// `deleted-phrase`
    DeletedPhrase(InlineMarkup),
    /// `editorial`
    Editorial(InlineMarkup),
    /// `effective-date`
    EffectiveDate(InlineMarkup),
    /// `external-xref`
    ExternalXref(ExternalXref),
    /// `footnote` (also produced for `footnote-ref`)
    Footnote(Footnote),
    /// `fraction`
    Fraction(InlineMarkup),
    /// `internal-xref`
    InternalXref(InternalXref),
    /// `italic`
    Italic(InlineMarkup),
    /// `nonsponsor`
    Nonsponsor(MemberName),
    /// `quote`
    Quote(InlineMarkup),
    /// `short-title`
    ShortTitle(InlineMarkup),
    /// `sponsor`
    Sponsor(SponsorName),
    /// `subscript` (also produced for `superscript` and `term`)
    Subscript(InlineMarkup),
    /// `linebreak`
    LineBreak,
    /// `nobreak`
    NoBreak,
    /// `omitted-text`
    OmittedText,
    /// `pagebreak`
    PageBreak,
    /// Any element this crate does not model yet.
    ///
    /// Callers should only use these nodes to reach the children when
    /// walking; a later release may start modelling the element, which would
    /// stop producing this variant for it.
    Unsupported(UnsupportedInline),
}

/// `sponsor` element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SponsorName {
    /// Member identifier (`name-id`)
    pub name_id: Option<String>,
    /// `by-request` flag as written in the source
    pub by_request: Option<String>,
    /// Display content
    pub content: InlineMarkup,
}

/// `cosponsor` and `nonsponsor` elements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberName {
    /// Member identifier (`name-id`)
    pub name_id: Option<String>,
    /// Display content
    pub content: InlineMarkup,
}

/// `committee-name` element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommitteeName {
    /// Committee identifier (`committee-id`)
    pub committee_id: Option<String>,
    /// Display content
    pub content: InlineMarkup,
}

/// `footnote` element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Footnote {
    /// Footnote anchor (`id`)
    pub id: Option<String>,
    /// Footnote content
    pub content: InlineMarkup,
}

/// `internal-xref` element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InternalXref {
    /// Target element id (`idref`)
    pub idref: Option<String>,
    /// Reference text
    pub content: InlineMarkup,
}

/// `external-xref` element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalXref {
    /// Kind of the cited document (`legal-doc`)
    pub legal_doc: Option<String>,
    /// Machine-readable citation (`parsable-cite`)
    pub parsable_cite: Option<String>,
    /// Reference text
    pub content: InlineMarkup,
}

/// Fallback for inline elements without a dedicated variant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnsupportedInline {
    /// Original tag and attributes
    pub element: UnsupportedElement,
    /// Decoded children
    pub content: InlineMarkup,
}

impl InlineMarkup {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node
    pub fn push(&mut self, inline: Inline) {
        self.0.push(inline);
    }

    /// Raw, unformatted text within the markup.
    ///
    /// This discards distinctions such as deleted versus added phrases, so
    /// it is only suitable for diagnostics and search, not presentation.
    pub fn text(&self) -> String {
        self.0.iter().map(Inline::text).collect()
    }

    /// Consume the wrapper and return the underlying nodes
    pub fn into_inner(self) -> Vec<Inline> {
        self.0
    }
}

impl Deref for InlineMarkup {
    type Target = [Inline];

    fn deref(&self) -> &[Inline] {
        &self.0
    }
}

impl From<Vec<Inline>> for InlineMarkup {
    fn from(nodes: Vec<Inline>) -> Self {
        Self(nodes)
    }
}

impl FromIterator<Inline> for InlineMarkup {
    fn from_iter<I: IntoIterator<Item = Inline>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a InlineMarkup {
    type Item = &'a Inline;
    type IntoIter = std::slice::Iter<'a, Inline>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Inline {
    /// Shorthand for a text leaf
    pub fn text_node(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// Raw text contained in this node and all of its descendants
    pub fn text(&self) -> String {
        match self {
            Inline::Text(text) => text.clone(),
            other => other.children().map(InlineMarkup::text).unwrap_or_default(),
        }
    }

    /// Direct child nodes, or `None` if this node is a leaf.
    ///
    /// Containers always return `Some`, even when they happen to be empty.
    pub fn children(&self) -> Option<&InlineMarkup> {
        match self {
            Inline::Text(_)
            | Inline::LineBreak
            | Inline::NoBreak
            | Inline::OmittedText
            | Inline::PageBreak => None,
            Inline::AddedPhrase(m)
            | Inline::ActName(m)
            | Inline::Bold(m)
            | Inline::Definition(m)
            | Inline::DeletedPhrase(m)
            | Inline::Editorial(m)
            | Inline::EffectiveDate(m)
            | Inline::Fraction(m)
            | Inline::Italic(m)
            | Inline::Quote(m)
            | Inline::ShortTitle(m)
            | Inline::Subscript(m) => Some(m),
            Inline::CommitteeName(n) => Some(&n.content),
            Inline::Cosponsor(n) | Inline::Nonsponsor(n) => Some(&n.content),
            Inline::ExternalXref(n) => Some(&n.content),
            Inline::Footnote(n) => Some(&n.content),
            Inline::InternalXref(n) => Some(&n.content),
            Inline::Sponsor(n) => Some(&n.content),
            Inline::Unsupported(n) => Some(&n.content),
        }
    }

    /// Tag name this node is canonically written as.
    ///
    /// Aliased tags report the tag of the variant they decode to, so a
    /// `term` element reports `subscript`. Text leaves have no tag.
    pub fn tag_name(&self) -> Option<&str> {
        let name = match self {
            Inline::Text(_) => return None,
            Inline::AddedPhrase(_) => "added-phrase",
            Inline::ActName(_) => "act-name",
            Inline::Bold(_) => "bold",
            Inline::CommitteeName(_) => "committee-name",
            Inline::Cosponsor(_) => "cosponsor",
            Inline::Definition(_) => "definition",
            Inline::DeletedPhrase(_) => "deleted-phrase",
            Inline::Editorial(_) => "editorial",
            Inline::EffectiveDate(_) => "effective-date",
            Inline::ExternalXref(_) => "external-xref",
            Inline::Footnote(_) => "footnote",
            Inline::Fraction(_) => "fraction",
            Inline::InternalXref(_) => "internal-xref",
            Inline::Italic(_) => "italic",
            Inline::Nonsponsor(_) => "nonsponsor",
            Inline::Quote(_) => "quote",
            Inline::ShortTitle(_) => "short-title",
            Inline::Sponsor(_) => "sponsor",
            Inline::Subscript(_) => "subscript",
            Inline::LineBreak => "linebreak",
            Inline::NoBreak => "nobreak",
            Inline::OmittedText => "omitted-text",
            Inline::PageBreak => "pagebreak",
            Inline::Unsupported(n) => n.element.name.as_str(),
        };
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::text_node(s)
    }

    #[test]
    fn test_text_concatenates_descendants() {
        let markup = InlineMarkup(vec![
            text("Be it enacted by "),
            Inline::Italic(InlineMarkup(vec![
                text("the "),
                Inline::Bold(InlineMarkup(vec![text("Senate")])),
            ])),
            Inline::LineBreak,
            text("."),
        ]);
        assert_eq!(markup.text(), "Be it enacted by the Senate.");
    }

    #[test]
    fn test_leaf_nodes_have_no_children() {
        assert!(text("x").children().is_none());
        assert!(Inline::LineBreak.children().is_none());
        assert!(Inline::PageBreak.children().is_none());
        assert_eq!(Inline::OmittedText.text(), "");
    }

    #[test]
    fn test_empty_container_still_has_children() {
        let bold = Inline::Bold(InlineMarkup::new());
        assert_eq!(bold.children().map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_attribute_wrappers_expose_content() {
        let sponsor = Inline::Sponsor(SponsorName {
            name_id: Some("S000033".to_string()),
            by_request: None,
            content: InlineMarkup(vec![text("Bernie Sanders")]),
        });
        assert_eq!(sponsor.text(), "Bernie Sanders");
        assert_eq!(sponsor.tag_name(), Some("sponsor"));
    }

    #[test]
    fn test_unsupported_tag_name() {
        let node = Inline::Unsupported(UnsupportedInline {
            element: UnsupportedElement::new("not-a-real-element"),
            content: InlineMarkup::new(),
        });
        assert_eq!(node.tag_name(), Some("not-a-real-element"));
        assert_eq!(text("x").tag_name(), None);
    }

    #[test]
    fn test_markup_serializes_as_plain_list() {
        let markup = InlineMarkup(vec![text("a")]);
        let json = serde_json::to_string(&markup).unwrap();
        assert_eq!(json, r#"[{"Text":"a"}]"#);
    }
}
