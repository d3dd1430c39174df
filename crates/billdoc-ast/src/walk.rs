//! Depth-first traversal of a bill tree
//!
//! Visitors never see the recursive shape of the tree directly. Instead
//! the walk functions call `enter_*` methods, and each one may return a
//! fresh sub-visitor that is used for that subtree only. Returning `None`
//! prunes the subtree: nothing below it is visited and the matching
//! `exit_*` call is skipped. The sub-visitor is handed back to the parent
//! in the `exit_*` call so that state gathered during the descent can be
//! folded into the parent.
//!
//! Every method has a no-op default. Note that the default
//! [`StructuralVisitor::enter_structural`] returns `None`, so a visitor that
//! does not implement it visits nothing at all.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Default)]
//! struct Headers(Vec<String>);
//!
//! impl StructuralVisitor for Headers {
//!     type Inline = Skip;
//!     type Toc = Skip;
//!     type Table = Skip;
//!     type List = Skip;
//!
//!     fn enter_structural(&mut self, node: &Structural) -> Option<Self> {
//!         self.0.push(node.header().text());
//!         Some(Headers::default())
//!     }
//!
//!     fn exit_structural(&mut self, _: &Structural, sub: Self) {
//!         self.0.extend(sub.0);
//!     }
//! }
//! ```

use crate::block::{Block, Formula, Graphic, List, QuotedBlock, QuotedContent};
use crate::document::Body;
use crate::inline::{Inline, InlineMarkup};
use crate::structural::Structural;
use crate::table::{Table, TableGroup, TableRow, TableRowSeq};
use crate::toc::{TableOfContents, TocEntry};

/// Visitor for inline markup
pub trait InlineVisitor: Sized {
    /// Called for nodes that can contain more inline markup
    fn enter_element(&mut self, _node: &Inline) -> Option<Self> {
        None
    }

    fn exit_element(&mut self, _node: &Inline, _sub: Self) {}

    /// Called for leaf nodes such as line breaks
    fn visit_element(&mut self, _node: &Inline) {}

    /// Called for raw text around and within the markup
    fn visit_text(&mut self, _text: &str) {}
}

/// Visitor for structural elements and the blocks nested in them
pub trait StructuralVisitor: Sized {
    type Inline: InlineVisitor;
    type Toc: TocVisitor;
    type Table: TableVisitor;
    type List: ListVisitor;

    fn enter_structural(&mut self, _node: &Structural) -> Option<Self> {
        None
    }

    fn exit_structural(&mut self, _node: &Structural, _sub: Self) {}

    /// Brackets the enumerator and header visits of a node.
    ///
    /// Not called when both the enumerator and the header are empty.
    fn enter_caption(&mut self, _node: &Structural) {}

    fn exit_caption(&mut self, _node: &Structural) {}

    fn enter_enum(&mut self, _enumerator: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_enum(&mut self, _enumerator: &InlineMarkup, _sub: Self::Inline) {}

    fn enter_header(&mut self, _header: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_header(&mut self, _header: &InlineMarkup, _sub: Self::Inline) {}

    fn enter_text(&mut self, _text: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_text(&mut self, _text: &InlineMarkup, _sub: Self::Inline) {}

    fn enter_continuation_text(&mut self, _text: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_continuation_text(&mut self, _text: &InlineMarkup, _sub: Self::Inline) {}

    fn enter_quoted_block(&mut self, _block: &QuotedBlock) -> Option<Self> {
        None
    }

    fn exit_quoted_block(&mut self, _block: &QuotedBlock, _sub: Self) {}

    /// A paragraph of running text directly inside a quoted block
    fn enter_quoted_text(&mut self, _text: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_quoted_text(&mut self, _text: &InlineMarkup, _sub: Self::Inline) {}

    /// Text trailing a quoted block, outside the quotation
    fn enter_after_quoted_block(&mut self, _text: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_after_quoted_block(&mut self, _text: &InlineMarkup, _sub: Self::Inline) {}

    fn visit_graphic(&mut self, _graphic: &Graphic) {}

    fn visit_formula(&mut self, _formula: &Formula) {}

    fn enter_toc(&mut self, _toc: &TableOfContents) -> Option<Self::Toc> {
        None
    }

    fn exit_toc(&mut self, _toc: &TableOfContents, _sub: Self::Toc) {}

    fn enter_table(&mut self, _table: &Table) -> Option<Self::Table> {
        None
    }

    fn exit_table(&mut self, _table: &Table, _sub: Self::Table) {}

    fn enter_list(&mut self, _list: &List) -> Option<Self::List> {
        None
    }

    fn exit_list(&mut self, _list: &List, _sub: Self::List) {}
}

/// Visitor for the inside of a table of contents
pub trait TocVisitor: Sized {
    type Inline: InlineVisitor;

    fn enter_toc_header(&mut self, _header: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_toc_header(&mut self, _header: &InlineMarkup, _sub: Self::Inline) {}

    fn enter_instructive_para(&mut self, _para: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_instructive_para(&mut self, _para: &InlineMarkup, _sub: Self::Inline) {}

    /// Called for simple, multi-column and unsupported entries
    fn enter_entry(&mut self, _entry: &TocEntry) -> Option<Self> {
        None
    }

    fn exit_entry(&mut self, _entry: &TocEntry, _sub: Self) {}

    /// The target column of a multi-column entry
    fn enter_enum(&mut self, _target: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_enum(&mut self, _target: &InlineMarkup, _sub: Self::Inline) {}

    fn enter_heading(&mut self, _heading: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_heading(&mut self, _heading: &InlineMarkup, _sub: Self::Inline) {}

    fn visit_page_number(&mut self, _page: &str) {}

    /// Called for quoted entries; the wrapped entries are walked with the
    /// returned sub-visitor
    fn enter_quoted(&mut self, _entry: &TocEntry) -> Option<Self> {
        None
    }

    fn exit_quoted(&mut self, _entry: &TocEntry, _sub: Self) {}
}

/// Visitor for the inside of a table
pub trait TableVisitor: Sized {
    type Inline: InlineVisitor;

    fn visit_title(&mut self, _title: &str) {}

    fn visit_description(&mut self, _description: &str) {}

    fn enter_group(&mut self, _group: &TableGroup) -> Option<Self> {
        None
    }

    fn exit_group(&mut self, _group: &TableGroup, _sub: Self) {}

    fn enter_head(&mut self, _head: &TableRowSeq) -> Option<Self> {
        None
    }

    fn exit_head(&mut self, _head: &TableRowSeq, _sub: Self) {}

    fn enter_body(&mut self, _body: &TableRowSeq) -> Option<Self> {
        None
    }

    fn exit_body(&mut self, _body: &TableRowSeq, _sub: Self) {}

    fn enter_row(&mut self, _row: &TableRow) -> Option<Self> {
        None
    }

    fn exit_row(&mut self, _row: &TableRow, _sub: Self) {}

    fn enter_cell(&mut self, _cell: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_cell(&mut self, _cell: &InlineMarkup, _sub: Self::Inline) {}
}

/// Visitor for the items of a list
pub trait ListVisitor: Sized {
    type Inline: InlineVisitor;

    fn enter_item(&mut self, _item: &InlineMarkup) -> Option<Self::Inline> {
        None
    }

    fn exit_item(&mut self, _item: &InlineMarkup, _sub: Self::Inline) {}
}

/// A visitor that ignores everything.
///
/// Use it as the associated visitor type for categories a visitor does not
/// care about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Skip;

impl InlineVisitor for Skip {}

impl StructuralVisitor for Skip {
    type Inline = Skip;
    type Toc = Skip;
    type Table = Skip;
    type List = Skip;
}

impl TocVisitor for Skip {
    type Inline = Skip;
}

impl TableVisitor for Skip {
    type Inline = Skip;
}

impl ListVisitor for Skip {
    type Inline = Skip;
}

/// Walk a sequence of inline nodes
pub fn walk_inline<V: InlineVisitor>(visitor: &mut V, markup: &[Inline]) {
    for node in markup {
        if let Inline::Text(text) = node {
            visitor.visit_text(text);
            continue;
        }

        match node.children() {
            None => visitor.visit_element(node),
            Some(children) => {
                if let Some(mut sub) = visitor.enter_element(node) {
                    walk_inline(&mut sub, children);
                    visitor.exit_element(node, sub);
                }
            }
        }
    }
}

/// Walk a sequence of structural elements
pub fn walk_structurals<V: StructuralVisitor>(visitor: &mut V, nodes: &[Structural]) {
    for node in nodes {
        walk_structural(visitor, node);
    }
}

/// Walk one structural element and everything below it
pub fn walk_structural<V: StructuralVisitor>(visitor: &mut V, node: &Structural) {
    let Some(mut sub) = visitor.enter_structural(node) else {
        return;
    };

    if node.has_caption() {
        sub.enter_caption(node);
        let enumerator = node.enumerator();
        if !enumerator.is_empty() {
            walk_slot(&mut sub, enumerator, V::enter_enum, V::exit_enum);
        }
        let header = node.header();
        if !header.is_empty() {
            walk_slot(&mut sub, header, V::enter_header, V::exit_header);
        }
        sub.exit_caption(node);
    }

    if !node.text().is_empty() {
        walk_slot(&mut sub, node.text(), V::enter_text, V::exit_text);
    }
    for block in node.blocks() {
        walk_block(&mut sub, block);
    }
    walk_structurals(&mut sub, node.children());
    if !node.continuation_text().is_empty() {
        walk_slot(
            &mut sub,
            node.continuation_text(),
            V::enter_continuation_text,
            V::exit_continuation_text,
        );
    }

    visitor.exit_structural(node, sub);
}

/// Walk a block element with the visitor of its enclosing structural element
pub fn walk_block<V: StructuralVisitor>(visitor: &mut V, block: &Block) {
    match block {
        Block::QuotedBlock(quoted) => walk_quoted_block(visitor, quoted),
        Block::Graphic(graphic) => visitor.visit_graphic(graphic),
        Block::Formula(formula) => visitor.visit_formula(formula),
        Block::Toc(toc) => {
            if let Some(mut sub) = visitor.enter_toc(toc) {
                walk_toc(&mut sub, toc);
                visitor.exit_toc(toc, sub);
            }
        }
        Block::Table(table) => {
            if let Some(mut sub) = visitor.enter_table(table) {
                walk_table(&mut sub, table);
                visitor.exit_table(table, sub);
            }
        }
        Block::List(list) => {
            if let Some(mut sub) = visitor.enter_list(list) {
                for item in &list.items {
                    walk_slot(
                        &mut sub,
                        item,
                        <V::List as ListVisitor>::enter_item,
                        <V::List as ListVisitor>::exit_item,
                    );
                }
                visitor.exit_list(list, sub);
            }
        }
    }
}

fn walk_quoted_block<V: StructuralVisitor>(visitor: &mut V, quoted: &QuotedBlock) {
    let Some(mut sub) = visitor.enter_quoted_block(quoted) else {
        return;
    };

    for item in &quoted.content {
        match item {
            QuotedContent::Block(block) => walk_block(&mut sub, block),
            QuotedContent::Structural(node) => walk_structural(&mut sub, node),
            QuotedContent::Text(text) => {
                walk_slot(&mut sub, text, V::enter_quoted_text, V::exit_quoted_text)
            }
        }
    }
    visitor.exit_quoted_block(quoted, sub);

    if !quoted.after.is_empty() {
        walk_slot(
            visitor,
            &quoted.after,
            V::enter_after_quoted_block,
            V::exit_after_quoted_block,
        );
    }
}

/// Walk the inside of a table of contents
pub fn walk_toc<T: TocVisitor>(visitor: &mut T, toc: &TableOfContents) {
    if !toc.header.is_empty() {
        walk_slot(visitor, &toc.header, T::enter_toc_header, T::exit_toc_header);
    }
    if !toc.instructive_para.is_empty() {
        walk_slot(
            visitor,
            &toc.instructive_para,
            T::enter_instructive_para,
            T::exit_instructive_para,
        );
    }
    walk_toc_entries(visitor, &toc.entries);
}

/// Walk a sequence of TOC entries
pub fn walk_toc_entries<T: TocVisitor>(visitor: &mut T, entries: &[TocEntry]) {
    for entry in entries {
        match entry {
            TocEntry::QuotedSimple(quoted) | TocEntry::QuotedMultiColumn(quoted) => {
                if let Some(mut sub) = visitor.enter_quoted(entry) {
                    walk_toc_entries(&mut sub, &quoted.entries);
                    visitor.exit_quoted(entry, sub);
                }
            }
            _ => {
                if let Some(mut sub) = visitor.enter_entry(entry) {
                    walk_entry_columns(&mut sub, entry);
                    visitor.exit_entry(entry, sub);
                }
            }
        }
    }
}

fn walk_entry_columns<T: TocVisitor>(visitor: &mut T, entry: &TocEntry) {
    match entry {
        TocEntry::Simple(simple) => {
            if !simple.header.is_empty() {
                walk_slot(visitor, &simple.header, T::enter_heading, T::exit_heading);
            }
        }
        TocEntry::MultiColumn(multi) => {
            if !multi.target.is_empty() {
                walk_slot(visitor, &multi.target, T::enter_enum, T::exit_enum);
            }
            if !multi.entry.header.is_empty() {
                walk_slot(visitor, &multi.entry.header, T::enter_heading, T::exit_heading);
            }
            if let Some(page) = &multi.page_number {
                visitor.visit_page_number(page);
            }
        }
        TocEntry::QuotedSimple(_) | TocEntry::QuotedMultiColumn(_) | TocEntry::Unsupported(_) => {}
    }
}

/// Walk the inside of a table
pub fn walk_table<T: TableVisitor>(visitor: &mut T, table: &Table) {
    for title in &table.titles {
        visitor.visit_title(title);
    }
    for description in &table.descriptions {
        visitor.visit_description(description);
    }
    for group in &table.groups {
        let Some(mut sub) = visitor.enter_group(group) else {
            continue;
        };
        if let Some(head) = &group.head {
            if let Some(mut rows) = sub.enter_head(head) {
                walk_rows(&mut rows, head);
                sub.exit_head(head, rows);
            }
        }
        for body in &group.bodies {
            if let Some(mut rows) = sub.enter_body(body) {
                walk_rows(&mut rows, body);
                sub.exit_body(body, rows);
            }
        }
        visitor.exit_group(group, sub);
    }
}

fn walk_rows<T: TableVisitor>(visitor: &mut T, seq: &TableRowSeq) {
    for row in &seq.rows {
        if let Some(mut sub) = visitor.enter_row(row) {
            for cell in &row.entries {
                walk_slot(&mut sub, cell, T::enter_cell, T::exit_cell);
            }
            visitor.exit_row(row, sub);
        }
    }
}

/// Enter an inline slot, walk it with the returned visitor, then exit.
fn walk_slot<V, I: InlineVisitor>(
    visitor: &mut V,
    markup: &InlineMarkup,
    enter: impl FnOnce(&mut V, &InlineMarkup) -> Option<I>,
    exit: impl FnOnce(&mut V, &InlineMarkup, I),
) {
    if let Some(mut sub) = enter(visitor, markup) {
        walk_inline(&mut sub, markup);
        exit(visitor, markup, sub);
    }
}

impl InlineMarkup {
    /// Walk this markup with the given visitor
    pub fn walk<V: InlineVisitor>(&self, visitor: &mut V) {
        walk_inline(visitor, self);
    }
}

impl Structural {
    /// Walk this node, starting with `enter_structural` on the visitor
    pub fn walk<V: StructuralVisitor>(&self, visitor: &mut V) {
        walk_structural(visitor, self);
    }
}

impl Block {
    pub fn walk<V: StructuralVisitor>(&self, visitor: &mut V) {
        walk_block(visitor, self);
    }
}

impl Body {
    /// Walk every top-level structural element of the body in order
    pub fn walk<V: StructuralVisitor>(&self, visitor: &mut V) {
        walk_structurals(visitor, &self.content);
    }
}
