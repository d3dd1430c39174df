//! Block-level elements
//!
//! Blocks are rendered on lines of their own: quoted blocks, graphics,
//! formulas, tables, lists and tables of contents. They share no common
//! behaviour, so code handling a [`Block`] matches on the variant.

use serde::{Deserialize, Serialize};

use crate::inline::InlineMarkup;
use crate::structural::Structural;
use crate::table::Table;
use crate::toc::TableOfContents;

/// Block-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Quoted legislative text (`quoted-block`)
    QuotedBlock(QuotedBlock),
    /// An image (`graphic`)
    Graphic(Graphic),
    /// A formula, optionally rendered as a graphic (`formula`)
    Formula(Formula),
    /// A table (`table`)
    Table(Table),
    /// A simple list (`list`)
    List(List),
    /// A table of contents (`toc`)
    Toc(TableOfContents),
}

/// A quoted block of text, typically the text an amendment inserts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuotedBlock {
    /// `act-name` attribute
    pub act_name: Option<String>,
    /// `id` attribute
    pub id: Option<String>,
    /// `parsable-cite` attribute
    pub parsable_cite: Option<String>,
    /// `style` attribute
    pub style: Option<String>,
    /// Quoted content in document order
    pub content: Vec<QuotedContent>,
    /// Text following the closing quote (`after-quoted-block`), e.g. `".`
    pub after: InlineMarkup,
}

/// One item of quoted-block content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuotedContent {
    Block(Block),
    Structural(Structural),
    /// A directly quoted paragraph of running text
    Text(InlineMarkup),
}

/// `graphic` element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graphic {
    pub depth: Option<String>,
    pub file: Option<String>,
    /// `graphic-desc`
    pub description: Option<String>,
    /// `graphic-indent`
    pub indent: Option<String>,
    /// `halign`
    pub horizontal_align: Option<String>,
    pub rotation: Option<String>,
    pub span: Option<String>,
}

/// `formula` element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Formula {
    pub id: Option<String>,
    pub graphic: Option<Graphic>,
}

/// `list` element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct List {
    /// Items (`list-item`) in order
    pub items: Vec<InlineMarkup>,
}

impl Block {
    /// Tag name of the element this block was decoded from
    pub fn tag_name(&self) -> &'static str {
        match self {
            Block::QuotedBlock(_) => "quoted-block",
            Block::Graphic(_) => "graphic",
            Block::Formula(_) => "formula",
            Block::Table(_) => "table",
            Block::List(_) => "list",
            Block::Toc(_) => "toc",
        }
    }
}
