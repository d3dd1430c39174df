//! Tables
//!
//! Only the layout skeleton is decoded: titles, descriptions, column specs
//! and rows of inline cells. Unknown children are skipped.

use std::io::BufRead;

use billdoc_ast::{Table, TableColumn, TableGroup, TableRow, TableRowSeq};

use crate::attrs::Attributes;
use crate::error::{BillError, Result};
use crate::inline::read_markup;
use crate::reader::{EventReader, StartTag, Token};
use crate::FromElement;

/// Read the children of `element`, handing each start tag to `on_child`.
///
/// Character data between children is dropped.
fn each_child<R: BufRead>(
    reader: &mut EventReader<R>,
    element: &str,
    mut on_child: impl FnMut(&mut EventReader<R>, StartTag) -> Result<()>,
) -> Result<()> {
    loop {
        match reader.next_token()? {
            Token::Start(child) => on_child(reader, child)?,
            Token::Text(_) => {}
            Token::End => return Ok(()),
            Token::Eof => return Err(BillError::eof(element)),
        }
    }
}

pub(crate) fn decode_table<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<Table> {
    let mut table = Table::default();
    each_child(reader, &tag.name, |reader, child| {
        match child.local_name() {
            "ttitle" => table.titles.push(reader.read_text(&child.name)?),
            "tdesc" => table.descriptions.push(reader.read_text(&child.name)?),
            "tgroup" => table.groups.push(decode_group(reader, &child)?),
            _ => reader.skip_element(&child.name)?,
        }
        Ok(())
    })?;
    Ok(table)
}

fn decode_group<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<TableGroup> {
    let mut group = TableGroup::default();
    each_child(reader, &tag.name, |reader, child| {
        match child.local_name() {
            "colspec" => {
                let mut attrs = Attributes::of(&child);
                group.columns.push(TableColumn {
                    name: attrs.take("colname"),
                    width: attrs.take("colwidth"),
                    align: attrs.take("align"),
                });
                reader.skip_element(&child.name)?;
            }
            "thead" => group.head = Some(decode_rows(reader, &child)?),
            "tbody" => group.bodies.push(decode_rows(reader, &child)?),
            _ => reader.skip_element(&child.name)?,
        }
        Ok(())
    })?;
    Ok(group)
}

fn decode_rows<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<TableRowSeq> {
    let mut seq = TableRowSeq::default();
    each_child(reader, &tag.name, |reader, child| {
        if child.local_name() == "row" {
            seq.rows.push(decode_row(reader, &child)?);
        } else {
            reader.skip_element(&child.name)?;
        }
        Ok(())
    })?;
    Ok(seq)
}

fn decode_row<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<TableRow> {
    let mut row = TableRow::default();
    each_child(reader, &tag.name, |reader, child| {
        if child.local_name() == "entry" {
            row.entries.push(read_markup(reader, &child.name)?);
        } else {
            reader.skip_element(&child.name)?;
        }
        Ok(())
    })?;
    Ok(row)
}

impl FromElement for Table {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        decode_table(reader, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_slice;

    const TABLE: &str = r#"<table frame="all">
  <ttitle>Authorized <bold>amounts</bold></ttitle>
  <tdesc>In millions</tdesc>
  <tgroup cols="2">
    <colspec colname="c1" colwidth="60pts" align="left"/>
    <colspec colname="c2" colwidth="30pts" align="right"/>
    <thead><row><entry>Fiscal year</entry><entry>Amount</entry></row></thead>
    <tbody>
      <row><entry>2018</entry><entry>$1,000</entry></row>
      <row><entry>2019</entry><entry><italic>$1,200</italic></entry></row>
    </tbody>
  </tgroup>
</table>"#;

    #[test]
    fn test_table_structure() {
        let table: Table = from_slice(TABLE.as_bytes()).unwrap();
        assert_eq!(table.titles, vec!["Authorized amounts"]);
        assert_eq!(table.descriptions, vec!["In millions"]);
        assert_eq!(table.groups.len(), 1);
        assert_eq!(table.row_count(), 3);

        let group = &table.groups[0];
        assert_eq!(group.columns.len(), 2);
        assert_eq!(group.columns[1].name.as_deref(), Some("c2"));
        assert_eq!(group.columns[1].align.as_deref(), Some("right"));
        let head = group.head.as_ref().unwrap();
        assert_eq!(head.rows[0].entries[0].text(), "Fiscal year");
        assert_eq!(group.bodies[0].rows[1].entries[1].text(), "$1,200");
    }

    #[test]
    fn test_empty_cells_are_kept() {
        let table: Table =
            from_slice(b"<table><tgroup><tbody><row><entry/><entry>x</entry></row></tbody></tgroup></table>")
                .unwrap();
        let row = &table.groups[0].bodies[0].rows[0];
        assert_eq!(row.entries.len(), 2);
        assert!(row.entries[0].is_empty());
    }
}
