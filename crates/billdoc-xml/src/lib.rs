//! # billdoc-xml
//!
//! Decoder for the XML markup used by U.S. legislative bills.
//!
//! The decoder is a recursive descent over quick-xml events. Each element
//! is classified by its tag into one of the node categories of
//! [`billdoc_ast`] and decoded with that category's content model. Tags the
//! decoder does not know become `Unsupported` nodes instead of errors, so
//! newer documents still decode and walk.
//!
//! ## Example
//!
//! ```no_run
//! use std::fs::File;
//!
//! let bill = billdoc_xml::parse_bill(File::open("BILLS-115s1804is.xml")?)?;
//! for node in bill.structurals() {
//!     println!("{} {}", node.enumerator().text(), node.header().text());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Any fragment with a decodable root can be read on its own:
//!
//! ```
//! use billdoc_ast::InlineMarkup;
//!
//! let markup: InlineMarkup = billdoc_xml::from_slice(b"<text>hello <italic>world</italic></text>")?;
//! assert_eq!(markup.text(), "hello world");
//! # Ok::<(), billdoc_xml::BillError>(())
//! ```

use std::io::{BufRead, BufReader, Read};

use billdoc_ast::Bill;
use log::debug;

mod attrs;
mod bill;
mod block;
mod classify;
pub mod error;
mod form;
mod inline;
pub mod reader;
mod structural;
mod table;
mod toc;

pub use classify::is_block_tag;
pub use error::{BillError, Result};
pub use reader::{EventReader, StartTag, Token};

/// Types that can be decoded from an element.
///
/// `from_element` is called right after `start` has been read and must
/// consume everything up to and including the matching end tag.
pub trait FromElement: Sized {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self>;
}

/// Decode `T` from the first element of `source`.
///
/// Anything after the end of that element is not read.
pub fn from_reader<T: FromElement, R: BufRead>(source: R) -> Result<T> {
    let mut reader = EventReader::new(source);
    loop {
        match reader.next_token()? {
            Token::Start(start) => return T::from_element(&mut reader, &start),
            Token::Text(_) => {}
            Token::End => return Err(BillError::UnexpectedEnd),
            Token::Eof => return Err(BillError::NoRootElement),
        }
    }
}

/// Decode `T` from an in-memory document
pub fn from_slice<T: FromElement>(xml: &[u8]) -> Result<T> {
    from_reader(xml)
}

/// Parse a complete bill from any reader
pub fn parse_bill<R: Read>(source: R) -> Result<Bill> {
    let bill = from_reader(BufReader::new(source))?;
    log_summary(&bill);
    Ok(bill)
}

/// Parse a complete bill held in memory
pub fn parse_bill_bytes(xml: &[u8]) -> Result<Bill> {
    let bill = from_slice(xml)?;
    log_summary(&bill);
    Ok(bill)
}

fn log_summary(bill: &Bill) {
    debug!(
        "parsed bill: form={}, {} top-level structural elements",
        bill.form.is_some(),
        bill.structurals().len()
    );
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use billdoc_ast::InlineMarkup;

    #[test]
    fn test_no_root_element() {
        let err = from_slice::<Bill>(b"<?xml version=\"1.0\"?>\n<!-- nothing -->\n").unwrap_err();
        assert!(matches!(err, BillError::NoRootElement));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            from_slice::<InlineMarkup>(b"").unwrap_err(),
            BillError::NoRootElement
        ));
    }

    #[test]
    fn test_reader_and_slice_agree() {
        let xml = br#"<bill><legis-body><section><enum>1.</enum><header>Short title</header></section></legis-body></bill>"#;
        let from_bytes = parse_bill_bytes(xml).unwrap();
        let from_io = parse_bill(&xml[..]).unwrap();
        assert_eq!(from_bytes, from_io);
    }

    #[test]
    fn test_error_is_fail_fast() {
        assert!(parse_bill_bytes(b"<bill><legis-body><section></legis-body></bill>").is_err());
    }

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
