//! Block elements: quoted blocks, graphics, formulas and lists
//!
//! Tables and tables of contents have their own modules.

use std::io::BufRead;

use billdoc_ast::{Block, Formula, Graphic, List, QuotedBlock, QuotedContent};

use crate::attrs::Attributes;
use crate::classify::{block_kind, is_block_tag, BlockKind};
use crate::error::{BillError, Result};
use crate::inline::read_markup;
use crate::reader::{EventReader, StartTag, Token};
use crate::structural::decode_structural;
use crate::table::decode_table;
use crate::toc::decode_toc;
use crate::FromElement;

/// Decode a block element.
///
/// Fails with [`BillError::NotABlock`] if `tag` is not a block tag; the
/// structural decoder only calls this after checking membership.
pub(crate) fn decode_block<R: BufRead>(
    reader: &mut EventReader<R>,
    tag: &StartTag,
) -> Result<Block> {
    let Some(kind) = block_kind(tag.local_name()) else {
        return Err(BillError::NotABlock(tag.name.clone()));
    };

    let block = match kind {
        BlockKind::QuotedBlock => Block::QuotedBlock(decode_quoted_block(reader, tag)?),
        BlockKind::Graphic => Block::Graphic(decode_graphic(reader, tag)?),
        BlockKind::Formula => Block::Formula(decode_formula(reader, tag)?),
        BlockKind::Toc => Block::Toc(decode_toc(reader, tag)?),
        BlockKind::Table => Block::Table(decode_table(reader, tag)?),
        BlockKind::List => Block::List(decode_list(reader, tag)?),
    };
    Ok(block)
}

fn decode_quoted_block<R: BufRead>(
    reader: &mut EventReader<R>,
    tag: &StartTag,
) -> Result<QuotedBlock> {
    let mut attrs = Attributes::of(tag);
    let mut quoted = QuotedBlock {
        act_name: attrs.take("act-name"),
        id: attrs.take("id"),
        parsable_cite: attrs.take("parsable-cite"),
        style: attrs.take("style"),
        ..Default::default()
    };

    loop {
        let child = match reader.next_token()? {
            Token::Start(child) => child,
            Token::Text(_) => continue,
            Token::End => return Ok(quoted),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        };

        let local = child.local_name();
        let item = if local == "after-quoted-block" {
            quoted.after = read_markup(reader, &child.name)?;
            continue;
        } else if is_block_tag(local) {
            QuotedContent::Block(decode_block(reader, &child)?)
        } else if local == "text" {
            QuotedContent::Text(read_markup(reader, &child.name)?)
        } else {
            QuotedContent::Structural(decode_structural(reader, &child)?)
        };
        quoted.content.push(item);
    }
}

fn decode_graphic<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<Graphic> {
    let mut attrs = Attributes::of(tag);
    let graphic = Graphic {
        depth: attrs.take("depth"),
        file: attrs.take("file"),
        description: attrs.take("graphic-desc"),
        indent: attrs.take("graphic-indent"),
        horizontal_align: attrs.take("halign"),
        rotation: attrs.take("rotation"),
        span: attrs.take("span"),
    };
    reader.skip_element(&tag.name)?;
    Ok(graphic)
}

fn decode_formula<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<Formula> {
    let mut attrs = Attributes::of(tag);
    let mut formula = Formula {
        id: attrs.take("id"),
        graphic: None,
    };

    loop {
        match reader.next_token()? {
            Token::Start(child) if child.local_name() == "graphic" => {
                formula.graphic = Some(decode_graphic(reader, &child)?);
            }
            Token::Start(child) => reader.skip_element(&child.name)?,
            Token::Text(_) => {}
            Token::End => return Ok(formula),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        }
    }
}

fn decode_list<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<List> {
    let mut list = List::default();
    loop {
        match reader.next_token()? {
            Token::Start(child) if child.local_name() == "list-item" => {
                list.items.push(read_markup(reader, &child.name)?);
            }
            Token::Start(child) => reader.skip_element(&child.name)?,
            Token::Text(_) => {}
            Token::End => return Ok(list),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        }
    }
}

impl FromElement for Block {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        decode_block(reader, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_slice;
    use billdoc_ast::StructuralKind;

    fn parse(xml: &str) -> Block {
        from_slice(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_quoted_block_content_model() {
        let block = parse(
            r#"<quoted-block style="OLC" id="Q1" act-name="Social Security Act">
                 <text>quoted text</text>
                 <subsection><enum>(c)</enum></subsection>
                 <graphic file="x.png"/>
                 <after-quoted-block>.</after-quoted-block>
               </quoted-block>"#,
        );
        let Block::QuotedBlock(quoted) = block else {
            panic!("expected quoted block");
        };

        assert_eq!(quoted.style.as_deref(), Some("OLC"));
        assert_eq!(quoted.id.as_deref(), Some("Q1"));
        assert_eq!(quoted.act_name.as_deref(), Some("Social Security Act"));
        assert_eq!(quoted.content.len(), 3);
        assert!(matches!(&quoted.content[0], QuotedContent::Text(t) if t.text() == "quoted text"));
        assert!(matches!(
            &quoted.content[1],
            QuotedContent::Structural(s) if s.kind() == &StructuralKind::Subsection
        ));
        assert!(matches!(&quoted.content[2], QuotedContent::Block(Block::Graphic(_))));
        assert_eq!(quoted.after.text(), ".");
    }

    #[test]
    fn test_graphic_attributes() {
        let Block::Graphic(graphic) = parse(
            r#"<graphic file="chart.eps" halign="center" graphic-desc="Chart" depth="3in"/>"#,
        ) else {
            panic!("expected graphic");
        };
        assert_eq!(graphic.file.as_deref(), Some("chart.eps"));
        assert_eq!(graphic.horizontal_align.as_deref(), Some("center"));
        assert_eq!(graphic.description.as_deref(), Some("Chart"));
        assert_eq!(graphic.depth.as_deref(), Some("3in"));
        assert!(graphic.rotation.is_none());
    }

    #[test]
    fn test_formula_with_graphic() {
        let Block::Formula(formula) =
            parse(r#"<formula id="F1"><graphic file="eq.png"/></formula>"#)
        else {
            panic!("expected formula");
        };
        assert_eq!(formula.id.as_deref(), Some("F1"));
        assert_eq!(
            formula.graphic.and_then(|g| g.file).as_deref(),
            Some("eq.png")
        );
    }

    #[test]
    fn test_list_items() {
        let Block::List(list) = parse(
            "<list><list-item>one</list-item><list-item><bold>two</bold></list-item></list>",
        ) else {
            panic!("expected list");
        };
        let texts: Vec<String> = list.items.iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_non_block_is_rejected() {
        let err = from_slice::<Block>(b"<section/>").unwrap_err();
        assert!(matches!(err, BillError::NotABlock(tag) if tag == "section"));
    }
}
