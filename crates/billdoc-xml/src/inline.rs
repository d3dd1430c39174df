//! Inline content model: text mixed with inline elements

use std::io::BufRead;

use billdoc_ast::{
    CommitteeName, ExternalXref, Footnote, Inline, InlineMarkup, InternalXref, MemberName,
    SponsorName, UnsupportedInline,
};
use log::debug;

use crate::attrs::{capture, Attributes};
use crate::classify::{inline_kind, InlineKind};
use crate::error::{BillError, Result};
use crate::reader::{EventReader, StartTag, Token};
use crate::FromElement;

/// Decode the inline content of the element `element`, up to and including
/// its end tag.
///
/// Every text token becomes its own `Inline::Text`; adjacent runs are not
/// merged.
pub(crate) fn read_markup<R: BufRead>(
    reader: &mut EventReader<R>,
    element: &str,
) -> Result<InlineMarkup> {
    let mut markup = InlineMarkup::new();
    loop {
        match reader.next_token()? {
            Token::Text(text) => {
                if !text.is_empty() {
                    markup.push(Inline::Text(text));
                }
            }
            Token::Start(tag) => markup.push(decode_inline(reader, &tag)?),
            Token::End => return Ok(markup),
            Token::Eof => return Err(BillError::eof(element)),
        }
    }
}

pub(crate) fn decode_inline<R: BufRead>(
    reader: &mut EventReader<R>,
    tag: &StartTag,
) -> Result<Inline> {
    let Some(kind) = inline_kind(tag.local_name()) else {
        debug!("unsupported inline element <{}>", tag.name);
        return Ok(Inline::Unsupported(UnsupportedInline {
            element: capture(tag),
            content: read_markup(reader, &tag.name)?,
        }));
    };

    let mut attrs = Attributes::of(tag);
    let name = tag.name.as_str();
    let inline = match kind {
        InlineKind::AddedPhrase => Inline::AddedPhrase(read_markup(reader, name)?),
        InlineKind::ActName => Inline::ActName(read_markup(reader, name)?),
        InlineKind::Bold => Inline::Bold(read_markup(reader, name)?),
        InlineKind::Definition => Inline::Definition(read_markup(reader, name)?),
        InlineKind::DeletedPhrase => Inline::DeletedPhrase(read_markup(reader, name)?),
        InlineKind::Editorial => Inline::Editorial(read_markup(reader, name)?),
        InlineKind::EffectiveDate => Inline::EffectiveDate(read_markup(reader, name)?),
        InlineKind::Fraction => Inline::Fraction(read_markup(reader, name)?),
        InlineKind::Italic => Inline::Italic(read_markup(reader, name)?),
        InlineKind::Quote => Inline::Quote(read_markup(reader, name)?),
        InlineKind::ShortTitle => Inline::ShortTitle(read_markup(reader, name)?),
        InlineKind::Subscript => Inline::Subscript(read_markup(reader, name)?),
        InlineKind::CommitteeName => Inline::CommitteeName(CommitteeName {
            committee_id: attrs.take("committee-id"),
            content: read_markup(reader, name)?,
        }),
        InlineKind::Cosponsor => Inline::Cosponsor(member(&mut attrs, reader, name)?),
        InlineKind::Nonsponsor => Inline::Nonsponsor(member(&mut attrs, reader, name)?),
        InlineKind::Sponsor => Inline::Sponsor(SponsorName {
            name_id: attrs.take("name-id"),
            by_request: attrs.take("by-request"),
            content: read_markup(reader, name)?,
        }),
        InlineKind::ExternalXref => Inline::ExternalXref(ExternalXref {
            legal_doc: attrs.take("legal-doc"),
            parsable_cite: attrs.take("parsable-cite"),
            content: read_markup(reader, name)?,
        }),
        InlineKind::Footnote => Inline::Footnote(Footnote {
            id: attrs.take("id"),
            content: read_markup(reader, name)?,
        }),
        InlineKind::InternalXref => Inline::InternalXref(InternalXref {
            idref: attrs.take("idref"),
            content: read_markup(reader, name)?,
        }),
        // Leaves carry no content; anything inside them is dropped.
        InlineKind::LineBreak => leaf(reader, name, Inline::LineBreak)?,
        InlineKind::NoBreak => leaf(reader, name, Inline::NoBreak)?,
        InlineKind::OmittedText => leaf(reader, name, Inline::OmittedText)?,
        InlineKind::PageBreak => leaf(reader, name, Inline::PageBreak)?,
    };
    Ok(inline)
}

fn member<R: BufRead>(
    attrs: &mut Attributes,
    reader: &mut EventReader<R>,
    name: &str,
) -> Result<MemberName> {
    Ok(MemberName {
        name_id: attrs.take("name-id"),
        content: read_markup(reader, name)?,
    })
}

fn leaf<R: BufRead>(reader: &mut EventReader<R>, name: &str, node: Inline) -> Result<Inline> {
    reader.skip_element(name)?;
    Ok(node)
}

impl FromElement for InlineMarkup {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        read_markup(reader, &start.name)
    }
}

impl FromElement for Inline {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        decode_inline(reader, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_slice;
    use billdoc_ast::UnsupportedElement;

    fn parse(xml: &str) -> InlineMarkup {
        from_slice(xml.as_bytes()).unwrap()
    }

    fn text(s: &str) -> Inline {
        Inline::text_node(s)
    }

    #[test]
    fn test_empty_element() {
        assert!(parse("<t></t>").is_empty());
        assert!(parse("<t/>").is_empty());
    }

    #[test]
    fn test_whitespace_is_kept() {
        assert_eq!(parse("<t> </t>"), InlineMarkup(vec![text(" ")]));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("<t>hello</t>"), InlineMarkup(vec![text("hello")]));
    }

    #[test]
    fn test_italic() {
        assert_eq!(
            parse("<t>hello <italic>world</italic></t>"),
            InlineMarkup(vec![
                text("hello "),
                Inline::Italic(InlineMarkup(vec![text("world")])),
            ])
        );
    }

    #[test]
    fn test_sponsor() {
        assert_eq!(
            parse(r#"<t><sponsor name-id="S000033">Bernie Sanders</sponsor></t>"#),
            InlineMarkup(vec![Inline::Sponsor(SponsorName {
                name_id: Some("S000033".to_string()),
                by_request: None,
                content: InlineMarkup(vec![text("Bernie Sanders")]),
            })])
        );
    }

    #[test]
    fn test_unsupported_element() {
        assert_eq!(
            parse(r#"<t><not-a-real-element foo="bar">baz</not-a-real-element></t>"#),
            InlineMarkup(vec![Inline::Unsupported(UnsupportedInline {
                element: UnsupportedElement::new("not-a-real-element").with_attribute("foo", "bar"),
                content: InlineMarkup(vec![text("baz")]),
            })])
        );
    }

    #[test]
    fn test_namespaced_attributes() {
        let markup = parse(
            r#"<t xmlns:x="urn:x"><sponsor x:name-id="ignored" name-id="A1">A</sponsor><odd x:k="v"/></t>"#,
        );
        let Inline::Sponsor(sponsor) = &markup[0] else {
            panic!("expected sponsor");
        };
        assert_eq!(sponsor.name_id.as_deref(), Some("A1"));

        let Inline::Unsupported(odd) = &markup[1] else {
            panic!("expected unsupported node");
        };
        assert_eq!(odd.element.attribute("x:k"), Some("v"));
    }

    #[test]
    fn test_text_runs_are_not_merged() {
        let markup = parse("<t>a<![CDATA[b]]>c</t>");
        assert_eq!(markup.len(), 3);
        assert_eq!(markup.text(), "abc");
    }

    #[test]
    fn test_aliases_decode_to_subscript() {
        let markup = parse("<t><superscript>2</superscript><term>x</term></t>");
        assert!(markup.iter().all(|n| matches!(n, Inline::Subscript(_))));
    }

    #[test]
    fn test_leaf_content_is_skipped() {
        let markup = parse("<t>a<linebreak>junk<bold>x</bold></linebreak>b</t>");
        assert_eq!(markup, InlineMarkup(vec![text("a"), Inline::LineBreak, text("b")]));
    }

    #[test]
    fn test_nested_attribute_wrappers() {
        let markup = parse(
            r#"<t><external-xref legal-doc="usc" parsable-cite="usc/42/1395"><italic>section 1395</italic></external-xref></t>"#,
        );
        let Inline::ExternalXref(xref) = &markup[0] else {
            panic!("expected external-xref");
        };
        assert_eq!(xref.legal_doc.as_deref(), Some("usc"));
        assert_eq!(xref.parsable_cite.as_deref(), Some("usc/42/1395"));
        assert_eq!(xref.content.text(), "section 1395");
    }

    #[test]
    fn test_truncated_input_is_an_error() {
        let err = from_slice::<InlineMarkup>(b"<t>hello <italic>world").unwrap_err();
        assert!(matches!(
            err,
            BillError::UnexpectedEof { .. } | BillError::Xml(_)
        ));
    }

    #[test]
    fn test_mismatched_end_tag_is_an_error() {
        assert!(from_slice::<InlineMarkup>(b"<t><bold>x</italic></t>").is_err());
    }
}
