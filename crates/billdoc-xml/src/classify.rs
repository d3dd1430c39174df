//! Tag classification tables
//!
//! Each node category has a static table from local tag name to variant.
//! A tag missing from a table falls back to that category's unsupported
//! node; classification itself never fails.

use billdoc_ast::StructuralKind;

/// Modelled inline elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InlineKind {
    AddedPhrase,
    ActName,
    Bold,
    CommitteeName,
    Cosponsor,
    Definition,
    DeletedPhrase,
    Editorial,
    EffectiveDate,
    ExternalXref,
    Footnote,
    Fraction,
    InternalXref,
    Italic,
    Nonsponsor,
    Quote,
    ShortTitle,
    Sponsor,
    Subscript,
    LineBreak,
    NoBreak,
    OmittedText,
    PageBreak,
}

const INLINE_TAGS: &[(&str, InlineKind)] = &[
    ("added-phrase", InlineKind::AddedPhrase),
    ("act-name", InlineKind::ActName),
    ("bold", InlineKind::Bold),
    ("committee-name", InlineKind::CommitteeName),
    ("cosponsor", InlineKind::Cosponsor),
    ("definition", InlineKind::Definition),
    ("deleted-phrase", InlineKind::DeletedPhrase),
    ("editorial", InlineKind::Editorial),
    ("effective-date", InlineKind::EffectiveDate),
    ("external-xref", InlineKind::ExternalXref),
    ("footnote", InlineKind::Footnote),
    ("footnote-ref", InlineKind::Footnote),
    ("fraction", InlineKind::Fraction),
    ("internal-xref", InlineKind::InternalXref),
    ("italic", InlineKind::Italic),
    ("linebreak", InlineKind::LineBreak),
    ("nobreak", InlineKind::NoBreak),
    ("nonsponsor", InlineKind::Nonsponsor),
    ("omitted-text", InlineKind::OmittedText),
    ("pagebreak", InlineKind::PageBreak),
    ("quote", InlineKind::Quote),
    ("short-title", InlineKind::ShortTitle),
    ("sponsor", InlineKind::Sponsor),
    ("subscript", InlineKind::Subscript),
    // TODO: superscript and term are decoded as subscript; give them
    // their own variants once renderers can tell them apart.
    ("superscript", InlineKind::Subscript),
    ("term", InlineKind::Subscript),
];

const STRUCTURAL_TAGS: &[(&str, StructuralKind)] = &[
    ("chapter", StructuralKind::Chapter),
    ("clause", StructuralKind::Clause),
    ("division", StructuralKind::Division),
    ("item", StructuralKind::Item),
    ("paragraph", StructuralKind::Paragraph),
    ("part", StructuralKind::Part),
    ("section", StructuralKind::Section),
    ("subchapter", StructuralKind::Chapter),
    ("subclause", StructuralKind::Subclause),
    ("subdivision", StructuralKind::Subdivision),
    ("subitem", StructuralKind::Subitem),
    ("subparagraph", StructuralKind::Subparagraph),
    ("subpart", StructuralKind::Part),
    ("subsection", StructuralKind::Subsection),
    ("subtitle", StructuralKind::Subtitle),
    ("title", StructuralKind::Title),
];

/// Block elements that may appear directly inside structural content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    QuotedBlock,
    Graphic,
    Formula,
    Toc,
    Table,
    List,
}

const BLOCK_TAGS: &[(&str, BlockKind)] = &[
    ("quoted-block", BlockKind::QuotedBlock),
    ("graphic", BlockKind::Graphic),
    ("formula", BlockKind::Formula),
    ("toc", BlockKind::Toc),
    ("table", BlockKind::Table),
    ("list", BlockKind::List),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TocEntryKind {
    Simple,
    MultiColumn,
    QuotedSimple,
    QuotedMultiColumn,
}

const TOC_ENTRY_TAGS: &[(&str, TocEntryKind)] = &[
    ("toc-entry", TocEntryKind::Simple),
    ("multi-column-toc-entry", TocEntryKind::MultiColumn),
    ("toc-quoted-entry", TocEntryKind::QuotedSimple),
    ("toc-multi-column-quoted-entry", TocEntryKind::QuotedMultiColumn),
];

fn lookup<'a, T>(table: &'a [(&str, T)], tag: &str) -> Option<&'a T> {
    table.iter().find(|(name, _)| *name == tag).map(|(_, kind)| kind)
}

pub(crate) fn inline_kind(tag: &str) -> Option<InlineKind> {
    lookup(INLINE_TAGS, tag).copied()
}

pub(crate) fn structural_kind(tag: &str) -> Option<StructuralKind> {
    lookup(STRUCTURAL_TAGS, tag).cloned()
}

pub(crate) fn block_kind(tag: &str) -> Option<BlockKind> {
    lookup(BLOCK_TAGS, tag).copied()
}

/// Whether `tag` is one of the block elements
pub fn is_block_tag(tag: &str) -> bool {
    block_kind(tag).is_some()
}

pub(crate) fn toc_entry_kind(tag: &str) -> Option<TocEntryKind> {
    lookup(TOC_ENTRY_TAGS, tag).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(structural_kind("subchapter"), Some(StructuralKind::Chapter));
        assert_eq!(structural_kind("subpart"), Some(StructuralKind::Part));
        assert_eq!(inline_kind("footnote-ref"), Some(InlineKind::Footnote));
        assert_eq!(inline_kind("superscript"), Some(InlineKind::Subscript));
        assert_eq!(inline_kind("term"), Some(InlineKind::Subscript));
    }

    #[test]
    fn test_unknown_tags_fall_through() {
        assert_eq!(inline_kind("not-a-real-element"), None);
        assert_eq!(structural_kind("appropriations-major"), None);
        assert_eq!(toc_entry_kind("toc-footnote"), None);
        assert!(!is_block_tag("paragraph"));
    }

    #[test]
    fn test_block_membership() {
        for tag in ["quoted-block", "graphic", "formula", "toc", "table", "list"] {
            assert!(is_block_tag(tag), "{tag}");
        }
        assert_eq!(block_kind("toc"), Some(BlockKind::Toc));
    }

    #[test]
    fn test_tables_have_no_duplicate_tags() {
        let mut tags: Vec<&str> = INLINE_TAGS.iter().map(|(t, _)| *t).collect();
        tags.extend(STRUCTURAL_TAGS.iter().map(|(t, _)| *t));
        tags.extend(BLOCK_TAGS.iter().map(|(t, _)| *t));
        tags.extend(TOC_ENTRY_TAGS.iter().map(|(t, _)| *t));
        let count = tags.len();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), count);
    }
}
