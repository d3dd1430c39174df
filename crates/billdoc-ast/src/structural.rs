//! Structural elements: the hierarchical divisions of legal text
//!
//! Titles, sections, paragraphs and the rest all share one shape: an
//! optional enumerator and header, body text, directly nested blocks, nested
//! structural children and continuation text. The kind of division is kept
//! in [`StructuralKind`].

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::inline::InlineMarkup;
use crate::UnsupportedElement;

/// Which division of legal text a [`Structural`] node is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuralKind {
    Title,
    Subtitle,
    /// `chapter` and `subchapter`
    Chapter,
    /// `part` and `subpart`
    Part,
    Section,
    Subsection,
    Paragraph,
    Subparagraph,
    Clause,
    Subclause,
    Item,
    Subitem,
    Division,
    Subdivision,
    /// Any element not modelled above; its content is still decoded with the
    /// structural content model so traversal can reach the children.
    Unsupported(UnsupportedElement),
}

impl StructuralKind {
    /// Canonical tag name for this kind, or the stored name for unsupported
    /// elements
    pub fn tag_name(&self) -> &str {
        match self {
            StructuralKind::Title => "title",
            StructuralKind::Subtitle => "subtitle",
            StructuralKind::Chapter => "chapter",
            StructuralKind::Part => "part",
            StructuralKind::Section => "section",
            StructuralKind::Subsection => "subsection",
            StructuralKind::Paragraph => "paragraph",
            StructuralKind::Subparagraph => "subparagraph",
            StructuralKind::Clause => "clause",
            StructuralKind::Subclause => "subclause",
            StructuralKind::Item => "item",
            StructuralKind::Subitem => "subitem",
            StructuralKind::Division => "division",
            StructuralKind::Subdivision => "subdivision",
            StructuralKind::Unsupported(element) => &element.name,
        }
    }
}

/// A hierarchical unit of legal text.
///
/// Every slot is independent; any subset may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structural {
    kind: StructuralKind,
    id: Option<String>,
    enumerator: InlineMarkup,
    header: InlineMarkup,
    text: InlineMarkup,
    blocks: Vec<Block>,
    children: Vec<Structural>,
    continuation_text: InlineMarkup,
}

impl Structural {
    /// Start building a node of the given kind
    pub fn builder(kind: StructuralKind) -> StructuralBuilder {
        StructuralBuilder::new(kind)
    }

    pub fn kind(&self) -> &StructuralKind {
        &self.kind
    }

    /// Element id, the target of `idref` attributes elsewhere in the bill
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Enumerator (`enum`), e.g. "Sec. 2." or "(a)"
    pub fn enumerator(&self) -> &InlineMarkup {
        &self.enumerator
    }

    pub fn header(&self) -> &InlineMarkup {
        &self.header
    }

    /// Body text (`text`)
    pub fn text(&self) -> &InlineMarkup {
        &self.text
    }

    /// Block elements nested directly in this element
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Nested structural elements
    pub fn children(&self) -> &[Structural] {
        &self.children
    }

    /// Text that resumes after the nested children (`continuation-text`)
    pub fn continuation_text(&self) -> &InlineMarkup {
        &self.continuation_text
    }

    /// Whether the node has a caption (an enumerator or a header)
    pub fn has_caption(&self) -> bool {
        !self.enumerator.is_empty() || !self.header.is_empty()
    }

    /// Depth-first search for a descendant (or this node) with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&Structural> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }
}

/// Builder used while decoding a [`Structural`] node
#[derive(Debug, Clone)]
pub struct StructuralBuilder {
    kind: StructuralKind,
    id: Option<String>,
    enumerator: InlineMarkup,
    header: InlineMarkup,
    text: InlineMarkup,
    blocks: Vec<Block>,
    children: Vec<Structural>,
    continuation_text: InlineMarkup,
}

impl StructuralBuilder {
    pub fn new(kind: StructuralKind) -> Self {
        Self {
            kind,
            id: None,
            enumerator: InlineMarkup::new(),
            header: InlineMarkup::new(),
            text: InlineMarkup::new(),
            blocks: Vec::new(),
            children: Vec::new(),
            continuation_text: InlineMarkup::new(),
        }
    }

    pub fn id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn enumerator(mut self, enumerator: InlineMarkup) -> Self {
        self.enumerator = enumerator;
        self
    }

    pub fn header(mut self, header: InlineMarkup) -> Self {
        self.header = header;
        self
    }

    pub fn text(mut self, text: InlineMarkup) -> Self {
        self.text = text;
        self
    }

    pub fn continuation_text(mut self, text: InlineMarkup) -> Self {
        self.continuation_text = text;
        self
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn child(mut self, child: Structural) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the enumerator in place (a repeated `enum` element wins)
    pub fn set_enumerator(&mut self, enumerator: InlineMarkup) {
        self.enumerator = enumerator;
    }

    pub fn set_header(&mut self, header: InlineMarkup) {
        self.header = header;
    }

    pub fn set_text(&mut self, text: InlineMarkup) {
        self.text = text;
    }

    pub fn set_continuation_text(&mut self, text: InlineMarkup) {
        self.continuation_text = text;
    }

    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn push_child(&mut self, child: Structural) {
        self.children.push(child);
    }

    pub fn build(self) -> Structural {
        Structural {
            kind: self.kind,
            id: self.id,
            enumerator: self.enumerator,
            header: self.header,
            text: self.text,
            blocks: self.blocks,
            children: self.children,
            continuation_text: self.continuation_text,
        }
    }
}
