//! Structural content model
//!
//! Children of a structural element are, in order of precedence: block
//! elements, the four inline slots (`enum`, `header`, `text`,
//! `continuation-text`) and nested structural elements. Character data
//! directly inside a structural element carries no meaning and is dropped.

use std::io::BufRead;

use billdoc_ast::{Structural, StructuralBuilder, StructuralKind};
use log::{debug, trace};

use crate::attrs::{capture, Attributes};
use crate::block::decode_block;
use crate::classify::{is_block_tag, structural_kind};
use crate::error::{BillError, Result};
use crate::inline::read_markup;
use crate::reader::{EventReader, StartTag, Token};
use crate::FromElement;

/// Decode any element found in structural position.
///
/// Unknown tags become [`StructuralKind::Unsupported`] nodes whose content
/// is still decoded with the structural content model.
pub(crate) fn decode_structural<R: BufRead>(
    reader: &mut EventReader<R>,
    tag: &StartTag,
) -> Result<Structural> {
    let kind = structural_kind(tag.local_name()).unwrap_or_else(|| {
        debug!("unsupported structural element <{}>", tag.name);
        StructuralKind::Unsupported(capture(tag))
    });
    trace!("decoding <{}>", tag.name);

    let mut attrs = Attributes::of(tag);
    let mut node = StructuralBuilder::new(kind).id(attrs.take("id"));

    loop {
        match reader.next_token()? {
            Token::Start(child) => read_child(reader, &child, &mut node)?,
            Token::Text(_) => {}
            Token::End => return Ok(node.build()),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        }
    }
}

fn read_child<R: BufRead>(
    reader: &mut EventReader<R>,
    child: &StartTag,
    node: &mut StructuralBuilder,
) -> Result<()> {
    let local = child.local_name();
    if is_block_tag(local) {
        node.push_block(decode_block(reader, child)?);
        return Ok(());
    }

    match local {
        "enum" => node.set_enumerator(read_markup(reader, &child.name)?),
        "header" => node.set_header(read_markup(reader, &child.name)?),
        "text" => node.set_text(read_markup(reader, &child.name)?),
        "continuation-text" => node.set_continuation_text(read_markup(reader, &child.name)?),
        _ => node.push_child(decode_structural(reader, child)?),
    }
    Ok(())
}

impl FromElement for Structural {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        decode_structural(reader, start)
    }
}
