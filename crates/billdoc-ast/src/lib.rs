//! billdoc-ast - Document tree for legislative bill markup
//!
//! This crate provides the node types produced when decoding a bill and
//! the traversal engine used to consume them.
//!
//! The tree has three layers:
//!
//! - **Structural** nodes ([`Structural`]): titles, sections, paragraphs
//!   and the other divisions of legal text
//! - **Blocks** ([`Block`]): quoted blocks, tables, lists, graphics and
//!   tables of contents
//! - **Inline** markup ([`InlineMarkup`]): text runs mixed with
//!   formatting and reference elements
//!
//! Elements the decoder does not model are kept as `Unsupported` nodes
//! carrying an [`UnsupportedElement`], so a walk still reaches their
//! content.
//!
//! Traversal goes through the visitor traits in [`walk`].

pub mod block;
pub mod document;
pub mod inline;
pub mod structural;
pub mod table;
pub mod toc;
pub mod unsupported;
pub mod walk;

pub use block::{Block, Formula, Graphic, List, QuotedBlock, QuotedContent};
pub use document::{Action, ActionDate, AssociatedDoc, Bill, Body, Date, Form};
pub use inline::{
    CommitteeName, ExternalXref, Footnote, Inline, InlineMarkup, InternalXref, MemberName,
    SponsorName, UnsupportedInline,
};
pub use structural::{Structural, StructuralBuilder, StructuralKind};
pub use table::{Table, TableColumn, TableGroup, TableRow, TableRowSeq};
pub use toc::{
    MultiColumnTocEntry, QuotedTocEntry, SimpleTocEntry, TableOfContents, TocEntry,
    UnsupportedTocEntry,
};
pub use unsupported::UnsupportedElement;
pub use walk::{
    walk_block, walk_inline, walk_structural, walk_structurals, walk_table, walk_toc,
    walk_toc_entries, InlineVisitor, ListVisitor, Skip, StructuralVisitor, TableVisitor,
    TocVisitor,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
