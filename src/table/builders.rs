//! Table builders - reshape analysis records into exportable tables
//!
//! Pure functions over [`AnalysisRecord`]s. Single-feature records become
//! attribute-indexed rows; two-feature records become pivot cells in a
//! pairwise matrix. Precondition violations (a metric kind handed to the
//! wrong builder) panic; data-shape problems (missing features or table
//! metrics) surface as errors.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::{Cell, Table};
use crate::analysis::{AnalysisRecord, AttributeType, ScalarMetric, ScalarName, TableMetric, TableMetricKind};
use crate::{Error, Result};

/// Column orderings for descriptive rows.
///
/// Every descriptive row shares the `common` prefix; the suffix depends on
/// the attribute's type. Passing the orders explicitly keeps the output
/// schema visible at the call site instead of buried in module globals.
#[derive(Debug, Clone, Copy)]
pub struct DescriptiveColumns {
    /// Columns shared by every attribute type
    pub common: &'static [ScalarName],
    /// Extension columns for numerical attributes
    pub numerical: &'static [ScalarName],
    /// Extension columns for categorical attributes
    pub categorical: &'static [ScalarName],
}

impl DescriptiveColumns {
    /// The standard ordering used by the stock exporter.
    pub const DEFAULT: Self = Self {
        common: &[ScalarName::TotalCount, ScalarName::Missing],
        numerical: &[
            ScalarName::Mean,
            ScalarName::Std,
            ScalarName::Min,
            ScalarName::Median,
            ScalarName::Max,
        ],
        categorical: &[ScalarName::Cardinality],
    };
}

impl Default for DescriptiveColumns {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Build a one-row table of descriptive scalar metrics for one attribute.
///
/// The column set is `columns.common` followed by the type-specific
/// extension, so rows built for different attributes of the same type can be
/// concatenated into one table. Metrics the record does not carry default
/// to 0. A record whose first feature is not numerical falls back to the
/// categorical ordering.
///
/// # Errors
///
/// Returns [`Error::MissingFeatures`] if the record has no features.
pub fn descriptive_row(
    attribute_name: &str,
    record: &AnalysisRecord,
    columns: &DescriptiveColumns,
) -> Result<Table> {
    let feature = record
        .first_feature()
        .ok_or(Error::MissingFeatures(record.kind()))?;

    let detail = match feature.attribute_type() {
        AttributeType::Numerical => columns.numerical,
        AttributeType::Categorical => columns.categorical,
    };

    let order: Vec<ScalarName> = columns.common.iter().chain(detail).copied().collect();
    let cells: Vec<Cell> = order
        .iter()
        .map(|name| Cell::Number(record.scalar_value(*name).unwrap_or(0.0)))
        .collect();

    let mut table = Table::new(order.iter().map(ToString::to_string).collect());
    table.push_row(attribute_name, cells);
    Ok(table)
}

/// Build a one-row table from a record's single-row table metric
/// (histogram bins or category counts).
///
/// The row is labeled by the record's attribute name; the columns are the
/// bin/category labels. A metric with no rows yields an empty table, which
/// the export step skips.
///
/// # Errors
///
/// Returns [`Error::MissingFeatures`] if the record has no features, or
/// [`Error::MissingTableMetric`] if it carries no table metric.
///
/// # Panics
///
/// Panics if the table-metric kind is neither `Histogram` nor `ValueCounts`.
pub fn single_row_table(record: &AnalysisRecord) -> Result<Table> {
    let feature = record
        .first_feature()
        .ok_or(Error::MissingFeatures(record.kind()))?;
    let metric = record
        .first_table_metric()
        .ok_or(Error::MissingTableMetric(record.kind()))?;

    assert!(
        matches!(
            metric.kind(),
            TableMetricKind::Histogram | TableMetricKind::ValueCounts
        ),
        "single_row_table expects HISTOGRAM or VALUE_COUNTS, got {}",
        metric.kind()
    );

    let mut table = Table::new(metric.column_indexes().to_vec());
    if let Some(row) = metric.rows().first() {
        table.push_row(
            feature.name(),
            row.cells().iter().map(|&v| Cell::Number(v)).collect(),
        );
    }
    Ok(table)
}

/// Build a full matrix table from a two-dimensional table metric.
///
/// Row labels come from each row's `row_index`; column labels come from the
/// metric's `column_indexes`.
///
/// # Panics
///
/// Panics if the metric kind is neither `ContingencyTable` nor
/// `TableDescriptive`.
#[must_use]
pub fn nested_table(metric: &TableMetric) -> Table {
    assert!(
        matches!(
            metric.kind(),
            TableMetricKind::ContingencyTable | TableMetricKind::TableDescriptive
        ),
        "nested_table expects CONTINGENCY_TABLE or TABLE_DESCRIPTIVE, got {}",
        metric.kind()
    );

    let mut table = Table::new(metric.column_indexes().to_vec());
    for row in metric.rows() {
        table.push_row(
            row.row_index().trim(),
            row.cells().iter().map(|&v| Cell::Number(v)).collect(),
        );
    }
    table
}

/// Build a symmetric square matrix over all attributes seen across `records`.
///
/// Each two-feature record with value v fills both (a,b) and (b,a); every
/// seen attribute gets `same_value` on the diagonal. Axes are sorted
/// lexicographically, so the output is deterministic. Pairs with no backing
/// record stay empty. An empty `records` slice yields an empty table.
#[must_use]
pub fn symmetric_pair_table(records: &[&AnalysisRecord], same_value: &Cell, corner_label: &str) -> Table {
    let mut names = BTreeSet::new();
    let mut cells: BTreeMap<(String, String), Cell> = BTreeMap::new();

    for record in records {
        let Some((a, b, value)) = pair_value(record) else {
            continue;
        };
        names.insert(a.clone());
        names.insert(b.clone());
        cells.insert((b.clone(), a.clone()), Cell::Number(value));
        cells.insert((a, b), Cell::Number(value));
    }

    for name in &names {
        cells.insert((name.clone(), name.clone()), same_value.clone());
    }

    let axis: Vec<String> = names.into_iter().collect();
    pivot(&axis, &axis, &cells, corner_label)
}

/// Build an ordered (asymmetric) pair matrix.
///
/// Unlike [`symmetric_pair_table`], each record only fills its own (a,b)
/// cell: feature order is meaningful for directional metrics such as ANOVA,
/// and the reverse cell stays empty unless an explicit (b,a) record exists.
/// The `same_value` override applies only to explicit self-pairs. Row labels
/// are the first-position attributes, column labels the second-position ones.
#[must_use]
pub fn ordered_pair_table(records: &[&AnalysisRecord], same_value: &Cell, corner_label: &str) -> Table {
    let mut row_names = BTreeSet::new();
    let mut column_names = BTreeSet::new();
    let mut cells: BTreeMap<(String, String), Cell> = BTreeMap::new();

    for record in records {
        let Some((a, b, value)) = pair_value(record) else {
            continue;
        };
        row_names.insert(a.clone());
        column_names.insert(b.clone());
        let cell = if a == b {
            same_value.clone()
        } else {
            Cell::Number(value)
        };
        cells.insert((a, b), cell);
    }

    let rows: Vec<String> = row_names.into_iter().collect();
    let columns: Vec<String> = column_names.into_iter().collect();
    pivot(&rows, &columns, &cells, corner_label)
}

/// Extract (first attribute, second attribute, first scalar value) from a
/// pairwise record, or skip it with a debug log when malformed.
fn pair_value(record: &AnalysisRecord) -> Option<(String, String, f64)> {
    if record.features().len() != 2 {
        debug!(kind = %record.kind(), features = record.features().len(), "skipping non-pairwise record");
        return None;
    }
    let Some(value) = record.scalar_metrics().first().map(ScalarMetric::value) else {
        debug!(kind = %record.kind(), "skipping pairwise record without scalar metric");
        return None;
    };
    Some((
        record.features()[0].name().to_string(),
        record.features()[1].name().to_string(),
        value,
    ))
}

/// Pivot a sparse (row, column) -> cell mapping into a wide table.
fn pivot(
    rows: &[String],
    columns: &[String],
    cells: &BTreeMap<(String, String), Cell>,
    corner_label: &str,
) -> Table {
    let mut table = Table::new(columns.to_vec()).with_corner_label(corner_label);
    for row in rows {
        let row_cells: Vec<Cell> = columns
            .iter()
            .map(|col| {
                cells
                    .get(&(row.clone(), col.clone()))
                    .cloned()
                    .unwrap_or(Cell::Empty)
            })
            .collect();
        table.push_row(row.clone(), row_cells);
    }
    table
}
