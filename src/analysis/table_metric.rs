//! Table Metric - nested row/column results within an analysis record

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a nested table metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TableMetricKind {
    /// Bin counts of a numerical attribute (single row)
    Histogram,
    /// Category counts of a categorical attribute (single row)
    ValueCounts,
    /// Cross-tabulation of two categorical attributes
    ContingencyTable,
    /// Per-category descriptive statistics of an attribute pair
    TableDescriptive,
}

impl TableMetricKind {
    /// Canonical SCREAMING_SNAKE name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Histogram => "HISTOGRAM",
            Self::ValueCounts => "VALUE_COUNTS",
            Self::ContingencyTable => "CONTINGENCY_TABLE",
            Self::TableDescriptive => "TABLE_DESCRIPTIVE",
        }
    }
}

impl fmt::Display for TableMetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled row of a table metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableRow {
    row_index: String,
    cells: Vec<f64>,
}

impl TableRow {
    /// Create a new row with its label and cell values.
    #[must_use]
    pub fn new(row_index: impl Into<String>, cells: Vec<f64>) -> Self {
        Self {
            row_index: row_index.into(),
            cells,
        }
    }

    /// Get the row label.
    #[must_use]
    pub fn row_index(&self) -> &str {
        &self.row_index
    }

    /// Get the cell values, ordered like the parent metric's column indexes.
    #[must_use]
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }
}

/// A nested tabular result: named columns and one or more labeled rows.
///
/// Histograms and value counts carry a single row whose cells line up with the
/// bin/category labels in `column_indexes`. Contingency and table-descriptive
/// metrics carry a full rows × columns matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableMetric {
    kind: TableMetricKind,
    column_indexes: Vec<String>,
    rows: Vec<TableRow>,
}

impl TableMetric {
    /// Create a new table metric.
    #[must_use]
    pub const fn new(kind: TableMetricKind, column_indexes: Vec<String>, rows: Vec<TableRow>) -> Self {
        Self {
            kind,
            column_indexes,
            rows,
        }
    }

    /// Convenience constructor for single-row metrics (histogram, value counts).
    #[must_use]
    pub fn single_row(kind: TableMetricKind, column_indexes: Vec<String>, cells: Vec<f64>) -> Self {
        Self::new(kind, column_indexes, vec![TableRow::new("0", cells)])
    }

    /// Get the metric kind.
    #[must_use]
    pub const fn kind(&self) -> TableMetricKind {
        self.kind
    }

    /// Get the column labels.
    #[must_use]
    pub fn column_indexes(&self) -> &[String] {
        &self.column_indexes
    }

    /// Get the rows.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}
