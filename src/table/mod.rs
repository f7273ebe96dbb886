//! Exported Table Model
//!
//! An in-memory tabular structure (ordered columns, labeled rows) destined for
//! one CSV file, plus the builders that reshape analysis records into tables.
//! Tables are transient: the exporter writes them and drops them.

mod builders;

pub use builders::{
    descriptive_row, nested_table, ordered_pair_table, single_row_table, symmetric_pair_table,
    DescriptiveColumns,
};

use std::fmt;

use crate::{Error, Result};

/// A single table cell.
///
/// Pivoted pair tables are sparse; coordinates with no backing record stay
/// [`Cell::Empty`] and render as an empty CSV field.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A numeric value
    Number(f64),
    /// A textual value (e.g. the "NA" diagonal literal of ANOVA tables)
    Text(String),
    /// No value
    Empty,
}

impl Cell {
    /// True if the cell holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Get the numeric value, if this is a number cell.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Empty => Ok(()),
        }
    }
}

/// A named tabular structure with ordered columns and labeled rows.
///
/// The row labels form the leftmost CSV column; `corner_label` is the header
/// of that column and stays empty when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    corner_label: Option<String>,
    columns: Vec<String>,
    rows: Vec<(String, Vec<Cell>)>,
}

impl Table {
    /// Create an empty table with the given column labels.
    #[must_use]
    pub const fn new(columns: Vec<String>) -> Self {
        Self {
            corner_label: None,
            columns,
            rows: Vec::new(),
        }
    }

    /// Set the top-left header cell label.
    #[must_use]
    pub fn with_corner_label(mut self, label: impl Into<String>) -> Self {
        self.corner_label = Some(label.into());
        self
    }

    /// Set the top-left header cell label in place.
    pub fn set_corner_label(&mut self, label: impl Into<String>) {
        self.corner_label = Some(label.into());
    }

    /// Get the top-left header cell label, if set.
    #[must_use]
    pub fn corner_label(&self) -> Option<&str> {
        self.corner_label.as_deref()
    }

    /// Get the column labels.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a labeled row.
    ///
    /// # Panics
    ///
    /// Panics if the number of cells does not match the number of columns.
    pub fn push_row(&mut self, label: impl Into<String>, cells: Vec<Cell>) {
        assert_eq!(
            cells.len(),
            self.columns.len(),
            "row length must match column count"
        );
        self.rows.push((label.into(), cells));
    }

    /// Iterate over rows as (label, cells) pairs.
    pub fn iter_rows(&self) -> impl Iterator<Item = (&str, &[Cell])> {
        self.rows.iter().map(|(label, cells)| (label.as_str(), cells.as_slice()))
    }

    /// Look up a cell by row and column label.
    #[must_use]
    pub fn cell(&self, row_label: &str, column_label: &str) -> Option<&Cell> {
        let col = self.columns.iter().position(|c| c == column_label)?;
        self.rows
            .iter()
            .find(|(label, _)| label == row_label)
            .map(|(_, cells)| &cells[col])
    }

    /// Concatenate tables with identical column sets into one.
    ///
    /// The first table supplies the column labels and corner label. An empty
    /// input yields an empty table with no columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnMismatch`] if a later table's columns differ
    /// from the first table's.
    pub fn concat(tables: Vec<Self>) -> Result<Self> {
        let mut iter = tables.into_iter();
        let Some(mut combined) = iter.next() else {
            return Ok(Self::new(Vec::new()));
        };

        for table in iter {
            if table.columns != combined.columns {
                return Err(Error::ColumnMismatch {
                    expected: combined.columns,
                    found: table.columns,
                });
            }
            combined.rows.extend(table.rows);
        }

        Ok(combined)
    }
}
