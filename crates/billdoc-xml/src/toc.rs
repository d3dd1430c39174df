//! Tables of contents

use std::io::BufRead;

use billdoc_ast::{
    Inline, InlineMarkup, MultiColumnTocEntry, QuotedTocEntry, SimpleTocEntry, TableOfContents,
    TocEntry, UnsupportedTocEntry,
};
use log::debug;

use crate::attrs::{capture, Attributes};
use crate::classify::{toc_entry_kind, TocEntryKind};
use crate::error::{BillError, Result};
use crate::inline::{decode_inline, read_markup};
use crate::reader::{EventReader, StartTag, Token};
use crate::FromElement;

pub(crate) fn decode_toc<R: BufRead>(
    reader: &mut EventReader<R>,
    tag: &StartTag,
) -> Result<TableOfContents> {
    let mut attrs = Attributes::of(tag);
    let mut toc = TableOfContents {
        container_level: attrs.take("container-level"),
        idref: attrs.take("idref"),
        lowest_bolded_level: attrs.take("lowest-bolded-level"),
        lowest_level: attrs.take("lowest-level"),
        quoted_block: attrs.take("quoted-block"),
        regeneration: attrs.take("regeneration"),
        ..Default::default()
    };

    loop {
        match reader.next_token()? {
            Token::Start(child) => match child.local_name() {
                "header" => toc.header = read_markup(reader, &child.name)?,
                "instructive-para" => toc.instructive_para = read_markup(reader, &child.name)?,
                _ => toc.entries.push(decode_entry(reader, &child)?),
            },
            Token::Text(_) => {}
            Token::End => return Ok(toc),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        }
    }
}

pub(crate) fn decode_entry<R: BufRead>(
    reader: &mut EventReader<R>,
    tag: &StartTag,
) -> Result<TocEntry> {
    let Some(kind) = toc_entry_kind(tag.local_name()) else {
        debug!("unsupported toc entry <{}>", tag.name);
        return Ok(TocEntry::Unsupported(UnsupportedTocEntry {
            element: capture(tag),
            content: reader.read_text(&tag.name)?.into_bytes(),
        }));
    };

    let entry = match kind {
        TocEntryKind::Simple => {
            let mut entry = simple_entry(tag);
            entry.header = read_markup(reader, &tag.name)?;
            TocEntry::Simple(entry)
        }
        TocEntryKind::MultiColumn => TocEntry::MultiColumn(decode_multi_column(reader, tag)?),
        TocEntryKind::QuotedSimple => TocEntry::QuotedSimple(decode_quoted(reader, tag)?),
        TocEntryKind::QuotedMultiColumn => {
            TocEntry::QuotedMultiColumn(decode_quoted(reader, tag)?)
        }
    };
    Ok(entry)
}

fn simple_entry(tag: &StartTag) -> SimpleTocEntry {
    let mut attrs = Attributes::of(tag);
    SimpleTocEntry {
        bold: attrs.take("bold"),
        idref: attrs.take("idref"),
        level: attrs.take("level"),
        header: InlineMarkup::new(),
    }
}

/// `target` and `page-num` fill their own columns; all other content is
/// the heading.
fn decode_multi_column<R: BufRead>(
    reader: &mut EventReader<R>,
    tag: &StartTag,
) -> Result<MultiColumnTocEntry> {
    let mut entry = MultiColumnTocEntry {
        entry: simple_entry(tag),
        ..Default::default()
    };

    loop {
        match reader.next_token()? {
            Token::Start(child) => match child.local_name() {
                "target" => entry.target = read_markup(reader, &child.name)?,
                "page-num" => entry.page_number = Some(reader.read_text(&child.name)?),
                _ => entry.entry.header.push(decode_inline(reader, &child)?),
            },
            Token::Text(text) => {
                if !text.is_empty() {
                    entry.entry.header.push(Inline::Text(text));
                }
            }
            Token::End => return Ok(entry),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        }
    }
}

fn decode_quoted<R: BufRead>(
    reader: &mut EventReader<R>,
    tag: &StartTag,
) -> Result<QuotedTocEntry> {
    let mut quoted = QuotedTocEntry {
        style: Attributes::of(tag).take("style"),
        entries: Vec::new(),
    };

    loop {
        match reader.next_token()? {
            Token::Start(child) => quoted.entries.push(decode_entry(reader, &child)?),
            Token::Text(_) => {}
            Token::End => return Ok(quoted),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        }
    }
}

impl FromElement for TableOfContents {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        decode_toc(reader, start)
    }
}

impl FromElement for TocEntry {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        decode_entry(reader, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_slice;

    #[test]
    fn test_toc_header_and_entries() {
        let toc: TableOfContents = from_slice(
            br#"<toc container-level="legis-body-container" lowest-level="section" regeneration="yes-regeneration">
                 <header>Table of contents</header>
                 <instructive-para>The table of contents for this Act is as follows:</instructive-para>
                 <toc-entry idref="H1" level="section" bold="off">Sec. 1. Short title.</toc-entry>
                 <toc-entry idref="H2" level="title" bold="on">Title I--General</toc-entry>
               </toc>"#,
        )
        .unwrap();

        assert_eq!(toc.container_level.as_deref(), Some("legis-body-container"));
        assert_eq!(toc.lowest_level.as_deref(), Some("section"));
        assert_eq!(toc.header.text(), "Table of contents");
        assert!(toc.instructive_para.text().starts_with("The table"));
        assert_eq!(toc.entries.len(), 2);

        let first = toc.entries[0].simple().unwrap();
        assert_eq!(first.idref.as_deref(), Some("H1"));
        assert_eq!(first.header.text(), "Sec. 1. Short title.");
        assert!(!toc.entries[0].is_bold());
        assert!(toc.entries[1].is_bold());
    }

    #[test]
    fn test_multi_column_entry() {
        let entry: TocEntry = from_slice(
            br#"<multi-column-toc-entry idref="H3" level="section"><target>Sec. 3.</target> Authorization <italic>of</italic> appropriations.<page-num>12</page-num></multi-column-toc-entry>"#,
        )
        .unwrap();

        let TocEntry::MultiColumn(multi) = entry else {
            panic!("expected multi-column entry");
        };
        assert_eq!(multi.entry.idref.as_deref(), Some("H3"));
        assert_eq!(multi.target.text(), "Sec. 3.");
        assert_eq!(multi.entry.header.text(), " Authorization of appropriations.");
        assert_eq!(multi.page_number.as_deref(), Some("12"));
    }

    #[test]
    fn test_quoted_entries_keep_wrapped_entries() {
        let entry: TocEntry = from_slice(
            br#"<toc-quoted-entry style="USC"><toc-entry level="section">Sec. 101. Definitions.</toc-entry><toc-entry level="section">Sec. 102. Scope.</toc-entry></toc-quoted-entry>"#,
        )
        .unwrap();

        let TocEntry::QuotedSimple(quoted) = entry else {
            panic!("expected quoted entry");
        };
        assert_eq!(quoted.style.as_deref(), Some("USC"));
        assert_eq!(quoted.entries.len(), 2);
        assert_eq!(
            quoted.entries[1].simple().map(|e| e.header.text()),
            Some("Sec. 102. Scope.".to_string())
        );
    }

    #[test]
    fn test_unsupported_entry_keeps_raw_text() {
        let entry: TocEntry =
            from_slice(br#"<toc-note kind="x">See <bold>note</bold>.</toc-note>"#).unwrap();
        let TocEntry::Unsupported(unsupported) = entry else {
            panic!("expected unsupported entry");
        };
        assert_eq!(unsupported.element.name, "toc-note");
        assert_eq!(unsupported.element.attribute("kind"), Some("x"));
        assert_eq!(unsupported.content, b"See note.".to_vec());
    }
}
