//! Error types for bill decoding

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors that can occur while decoding a bill.
///
/// Decoding is fail-fast: the first error aborts the parse and no partial
/// tree is returned.
#[derive(Error, Debug)]
pub enum BillError {
    /// Malformed XML, including mismatched end tags
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute syntax
    #[error("XML attribute error: {0}")]
    Attribute(#[from] AttrError),

    /// A tag or attribute name that is not valid UTF-8
    #[error("invalid UTF-8 in markup: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The input ended before the named element was closed
    #[error("unexpected end of input inside <{element}>")]
    UnexpectedEof { element: String },

    /// An end tag appeared where a start tag was expected
    #[error("unexpected end tag before the root element")]
    UnexpectedEnd,

    /// The input holds no element at all
    #[error("no root element found")]
    NoRootElement,

    /// An attribute value does not have the expected format
    #[error("invalid {attribute} value {value:?}: {reason}")]
    MalformedAttribute {
        attribute: String,
        value: String,
        reason: String,
    },

    /// An element decoded as a block is not one of the block elements
    #[error("<{0}> is not a block element")]
    NotABlock(String),
}

impl BillError {
    pub(crate) fn eof(element: &str) -> Self {
        BillError::UnexpectedEof {
            element: element.to_string(),
        }
    }
}

/// Result type for bill decoding
pub type Result<T> = std::result::Result<T, BillError>;
