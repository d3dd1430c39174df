//! Document envelope: the root element, `form` and `legis-body`

use std::io::BufRead;

use billdoc_ast::{Bill, Body};

use crate::attrs::Attributes;
use crate::error::{BillError, Result};
use crate::form::decode_form;
use crate::reader::{EventReader, StartTag, Token};
use crate::structural::decode_structural;
use crate::FromElement;

/// Decode a bill from its root element, whatever its name.
///
/// Only `form` and `legis-body` are kept; other children of the root
/// (`metadata`, `attestation`, ...) are skipped.
pub(crate) fn decode_bill<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<Bill> {
    let mut bill = Bill::default();

    loop {
        match reader.next_token()? {
            Token::Start(child) => match child.local_name() {
                "form" => bill.form = Some(decode_form(reader, &child)?),
                "legis-body" => bill.body = Some(decode_body(reader, &child)?),
                _ => reader.skip_element(&child.name)?,
            },
            Token::Text(_) => {}
            Token::End => return Ok(bill),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        }
    }
}

/// Every child of the body is decoded as a structural element.
pub(crate) fn decode_body<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<Body> {
    let mut body = Body {
        style: Attributes::of(tag).take("style"),
        content: Vec::new(),
    };

    loop {
        match reader.next_token()? {
            Token::Start(child) => body.content.push(decode_structural(reader, &child)?),
            Token::Text(_) => {}
            Token::End => return Ok(body),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        }
    }
}

impl FromElement for Bill {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        decode_bill(reader, start)
    }
}

impl FromElement for Body {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        decode_body(reader, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_slice;
    use billdoc_ast::StructuralKind;

    #[test]
    fn test_any_root_element() {
        let bill: Bill = from_slice(
            br#"<resolution resolution-stage="Introduced-in-House"><metadata><dc:title xmlns:dc="urn:dc">x</dc:title></metadata><legis-body><section/></legis-body></resolution>"#,
        )
        .unwrap();
        assert!(bill.form.is_none());
        assert_eq!(bill.structurals().len(), 1);
    }

    #[test]
    fn test_body_style_and_children() {
        let body: Body = from_slice(
            br#"<legis-body style="OLC" xml:lang="en"><title><header>General</header></title><section><enum>1.</enum></section></legis-body>"#,
        )
        .unwrap();
        assert_eq!(body.style.as_deref(), Some("OLC"));
        let kinds: Vec<&StructuralKind> = body.content.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![&StructuralKind::Title, &StructuralKind::Section]);
    }

    #[test]
    fn test_missing_body_is_none() {
        let bill: Bill = from_slice(b"<bill><form><congress>115th</congress></form></bill>").unwrap();
        assert!(bill.body.is_none());
        assert_eq!(
            bill.form.and_then(|f| f.congress).as_deref(),
            Some("115th")
        );
    }
}
