//! Table structure (CALS-style `tgroup`/`thead`/`tbody`/`row`/`entry`)

use serde::{Deserialize, Serialize};

use crate::inline::InlineMarkup;

/// A table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Titles (`ttitle`)
    pub titles: Vec<String>,
    /// Descriptions (`tdesc`)
    pub descriptions: Vec<String>,
    /// Column groups (`tgroup`)
    pub groups: Vec<TableGroup>,
}

/// A group of columns sharing one head and any number of bodies
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableGroup {
    /// Column definitions (`colspec`)
    pub columns: Vec<TableColumn>,
    pub head: Option<TableRowSeq>,
    pub bodies: Vec<TableRowSeq>,
}

/// Column definition (`colspec`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableColumn {
    /// `colname`
    pub name: Option<String>,
    /// `colwidth`
    pub width: Option<String>,
    /// `align`
    pub align: Option<String>,
}

/// Rows of a `thead` or `tbody`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRowSeq {
    pub rows: Vec<TableRow>,
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells (`entry`) in this row
    pub entries: Vec<InlineMarkup>,
}

impl Table {
    /// Total number of rows across all groups, heads included
    pub fn row_count(&self) -> usize {
        self.groups
            .iter()
            .map(|g| {
                g.head.as_ref().map_or(0, |h| h.rows.len())
                    + g.bodies.iter().map(|b| b.rows.len()).sum::<usize>()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_includes_head_and_bodies() {
        let row = TableRow {
            entries: vec![InlineMarkup::new()],
        };
        let table = Table {
            groups: vec![TableGroup {
                columns: vec![],
                head: Some(TableRowSeq {
                    rows: vec![row.clone()],
                }),
                bodies: vec![
                    TableRowSeq {
                        rows: vec![row.clone(), row.clone()],
                    },
                    TableRowSeq { rows: vec![row] },
                ],
            }],
            ..Default::default()
        };
        assert_eq!(table.row_count(), 4);
    }
}
