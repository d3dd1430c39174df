//! Tables of contents and their entries

use serde::{Deserialize, Serialize};

use crate::inline::InlineMarkup;
use crate::UnsupportedElement;

/// `toc` block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableOfContents {
    /// `container-level`
    pub container_level: Option<String>,
    /// `idref`
    pub idref: Option<String>,
    /// `lowest-bolded-level`
    pub lowest_bolded_level: Option<String>,
    /// `lowest-level`
    pub lowest_level: Option<String>,
    /// `quoted-block`
    pub quoted_block: Option<String>,
    /// `regeneration`
    pub regeneration: Option<String>,
    pub header: InlineMarkup,
    /// `instructive-para`
    pub instructive_para: InlineMarkup,
    pub entries: Vec<TocEntry>,
}

/// An entry of a table of contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TocEntry {
    /// `toc-entry`
    Simple(SimpleTocEntry),
    /// `multi-column-toc-entry`
    MultiColumn(MultiColumnTocEntry),
    /// `toc-quoted-entry`
    QuotedSimple(QuotedTocEntry),
    /// `toc-multi-column-quoted-entry`
    QuotedMultiColumn(QuotedTocEntry),
    /// Anything else found among the entries
    Unsupported(UnsupportedTocEntry),
}

/// `toc-entry`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleTocEntry {
    /// `bold` code
    pub bold: Option<String>,
    /// `idref`, the id of the structural element this entry points at
    pub idref: Option<String>,
    /// `level` code, e.g. "section"
    pub level: Option<String>,
    pub header: InlineMarkup,
}

/// `multi-column-toc-entry`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiColumnTocEntry {
    pub entry: SimpleTocEntry,
    /// Left column (`target`), usually the enumerator
    pub target: InlineMarkup,
    /// `page-num`
    pub page_number: Option<String>,
}

/// Quoted entries wrapping one or more regular entries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuotedTocEntry {
    /// `style` code
    pub style: Option<String>,
    pub entries: Vec<TocEntry>,
}

/// Fallback for unknown TOC children
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnsupportedTocEntry {
    pub element: UnsupportedElement,
    /// Character data found inside the element
    pub content: Vec<u8>,
}

impl SimpleTocEntry {
    /// Whether the `bold` code switches bold on
    pub fn is_bold(&self) -> bool {
        matches!(self.bold.as_deref(), Some("on") | Some("yes"))
    }
}

impl TocEntry {
    /// The underlying simple entry, if this is a simple or multi-column entry
    pub fn simple(&self) -> Option<&SimpleTocEntry> {
        match self {
            TocEntry::Simple(entry) => Some(entry),
            TocEntry::MultiColumn(entry) => Some(&entry.entry),
            _ => None,
        }
    }

    /// Whether the entry is printed in bold
    pub fn is_bold(&self) -> bool {
        self.simple().is_some_and(SimpleTocEntry::is_bold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_codes() {
        let on = SimpleTocEntry {
            bold: Some("on".to_string()),
            ..Default::default()
        };
        let off = SimpleTocEntry {
            bold: Some("off".to_string()),
            ..Default::default()
        };
        assert!(TocEntry::Simple(on).is_bold());
        assert!(!TocEntry::Simple(off).is_bold());
        assert!(!TocEntry::Simple(SimpleTocEntry::default()).is_bold());
    }

    #[test]
    fn test_simple_view_of_multi_column() {
        let entry = TocEntry::MultiColumn(MultiColumnTocEntry {
            entry: SimpleTocEntry {
                idref: Some("H1".to_string()),
                ..Default::default()
            },
            ..Default::default()
        });
        assert_eq!(entry.simple().and_then(|e| e.idref.as_deref()), Some("H1"));
        assert!(TocEntry::QuotedSimple(QuotedTocEntry::default())
            .simple()
            .is_none());
    }
}
