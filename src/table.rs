use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::ansi::{pad, visible_width};
use crate::cell::Cell;

const SEPARATOR: &str = "   ";

#[derive(Debug, Error)]
pub enum TableError {
    #[error("table must be an array of rows")]
    InvalidTable,

    #[error("row {0} is not an array")]
    InvalidRow(usize),
}

/// Per-column alignment. Padding goes after the cell for `Left`,
/// before it for `Right`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

impl Alignment {
    pub const LEFT_MARKER: &'static str = "l";
    pub const RIGHT_MARKER: &'static str = "r";

    /// `"r"` selects right alignment; any other marker is left.
    pub fn from_marker(marker: &str) -> Self {
        if marker == Self::RIGHT_MARKER {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Alignment::Left => Self::LEFT_MARKER,
            Alignment::Right => Self::RIGHT_MARKER,
        }
    }
}

/// An aligned text table. Rows are stringified once at construction;
/// rendering pads every cell to its column width and joins cells with
/// a three-space separator.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
    align: Vec<Alignment>,
}

impl Table {
    pub fn new<R, C, V>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: Into<Cell>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|value| value.into().into_text())
                    .collect()
            })
            .collect();
        Table {
            rows,
            align: Vec::new(),
        }
    }

    /// Build a table from untyped JSON. The value must be an array of
    /// arrays; any row that is not an array rejects the whole table.
    pub fn from_json(value: &Value) -> Result<Self, TableError> {
        let rows = value.as_array().ok_or(TableError::InvalidTable)?;
        let mut table = Vec::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let cells = row
                .as_array()
                .ok_or(TableError::InvalidRow(row_index))?;
            table.push(
                cells
                    .iter()
                    .map(|cell| Cell::from(cell).into_text())
                    .collect(),
            );
        }
        Ok(Table {
            rows: table,
            align: Vec::new(),
        })
    }

    /// Build a table from pre-joined lines, one row per line, cells
    /// split on `delimiter`.
    pub fn from_delimited<I, S>(lines: I, delimiter: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| {
                line.as_ref()
                    .split(delimiter)
                    .map(str::to_string)
                    .collect()
            })
            .collect();
        Table {
            rows,
            align: Vec::new(),
        }
    }

    /// Configure per-column alignment. Entries beyond the supplied
    /// sequence default to left, up to the width of the first row.
    pub fn set_alignment<I>(mut self, align: I) -> Self
    where
        I: IntoIterator<Item = Alignment>,
    {
        let columns = self.rows.first().map(Vec::len).unwrap_or(0);
        let mut align: Vec<Alignment> = align.into_iter().collect();
        while align.len() < columns {
            align.push(Alignment::default());
        }
        self.align = align;
        self
    }

    pub fn print(&self) {
        print!("{self}");
    }

    fn column_widths(&self) -> Vec<usize> {
        let num_cols = self
            .rows
            .iter()
            .map(|row| row.len())
            .max()
            .unwrap_or(0);

        let mut widths = vec![0; num_cols];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = visible_width(cell);
                if widths[i] < width {
                    widths[i] = width;
                }
            }
        }
        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        for row in &self.rows {
            let mut separator = "";
            for (i, cell) in row.iter().enumerate() {
                // Rows longer than the first row can run past the
                // configured alignment; out-of-range columns are left-aligned.
                let align = self.align.get(i).copied().unwrap_or_default();
                write!(f, "{separator}{}", pad(cell, widths[i], align))?;
                separator = SEPARATOR;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn markers_round_trip() {
        assert_eq!(Alignment::from_marker("l"), Alignment::Left);
        assert_eq!(Alignment::from_marker("r"), Alignment::Right);
        assert_eq!(Alignment::Left.marker(), "l");
        assert_eq!(Alignment::Right.marker(), "r");
    }

    #[test]
    fn unknown_markers_fall_back_to_left() {
        assert_eq!(Alignment::from_marker("c"), Alignment::Left);
        assert_eq!(Alignment::from_marker(""), Alignment::Left);
    }

    #[test]
    fn alignment_extends_to_first_row_width() {
        let table = Table::new([["a", "b", "c"], ["dd", "ee", "ff"]])
            .set_alignment([Alignment::Right]);

        assert_eq!(table.to_string(), " a   b    c \ndd   ee   ff\n");
    }

    #[test]
    fn excess_alignment_entries_are_kept() {
        let table = Table::new([["a"]])
            .set_alignment([Alignment::Right, Alignment::Right]);

        assert_eq!(table.to_string(), "a\n");
    }

    #[test]
    fn rows_wider_than_the_first_default_to_left() {
        let table = Table::new([vec!["a"], vec!["bb", "ccc"]])
            .set_alignment([Alignment::Right]);

        assert_eq!(table.to_string(), " a\nbb   ccc\n");
    }

    #[test]
    fn rendering_without_configured_alignment_does_not_panic() {
        let table = Table::new([["a", "bb"], ["ccc", "d"]]);

        assert_eq!(table.to_string(), "a     bb\nccc   d \n");
    }

    #[test]
    fn column_widths_span_ragged_rows() {
        let table = Table::new([vec!["a"], vec!["bb", "ccc"], vec!["dddd"]]);

        assert_eq!(table.to_string(), "a   \nbb     ccc\ndddd\n");
    }
}
