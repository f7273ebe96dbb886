//! Analysis Record - one computed result tagged with its metric kind

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Attribute, TableMetric};

/// Metric kind of an analysis record.
///
/// The kind determines how the record is reshaped for export: per-attribute
/// kinds become rows or single-row tables, pairwise kinds become pivot cells,
/// and nested kinds become full matrices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    /// Scalar descriptive statistics for one attribute
    Descriptive,
    /// Bin counts for one numerical attribute
    Histogram,
    /// Category counts for one categorical attribute
    ValueCounts,
    /// Pearson correlation for a numerical attribute pair (symmetric)
    PearsonCorrelation,
    /// Information gain for a categorical attribute pair (symmetric)
    InformationGain,
    /// Chi-square statistic for a categorical attribute pair (symmetric)
    ChiSquare,
    /// ANOVA F-statistic for a (numerical, categorical) pair (directional)
    Anova,
    /// Contingency table for a categorical attribute pair
    ContingencyTable,
    /// Per-category descriptive table for an attribute pair
    TableDescriptive,
}

impl AnalysisKind {
    /// Canonical name used in export file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descriptive => "DESCRIPTIVE",
            Self::Histogram => "HISTOGRAM",
            Self::ValueCounts => "VALUE_COUNTS",
            Self::PearsonCorrelation => "PEARSON_CORRELATION",
            Self::InformationGain => "INFORMATION_GAIN",
            Self::ChiSquare => "CHI_SQUARE",
            Self::Anova => "ANOVA",
            Self::ContingencyTable => "CONTINGENCY_TABLE",
            Self::TableDescriptive => "TABLE_DESCRIPTIVE",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a scalar metric within a descriptive record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScalarName {
    /// Number of non-null values
    TotalCount,
    /// Number of missing values
    Missing,
    /// Arithmetic mean
    Mean,
    /// Standard deviation
    Std,
    /// Minimum value
    Min,
    /// Median value
    Median,
    /// Maximum value
    Max,
    /// Number of distinct categories
    Cardinality,
}

impl ScalarName {
    /// Canonical name used as a CSV column label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalCount => "TOTAL_COUNT",
            Self::Missing => "MISSING",
            Self::Mean => "MEAN",
            Self::Std => "STD",
            Self::Min => "MIN",
            Self::Median => "MEDIAN",
            Self::Max => "MAX",
            Self::Cardinality => "CARDINALITY",
        }
    }
}

impl fmt::Display for ScalarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named scalar result within an analysis record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScalarMetric {
    name: ScalarName,
    value: f64,
}

impl ScalarMetric {
    /// Create a new scalar metric.
    #[must_use]
    pub const fn new(name: ScalarName, value: f64) -> Self {
        Self { name, value }
    }

    /// Get the metric name.
    #[must_use]
    pub const fn name(&self) -> ScalarName {
        self.name
    }

    /// Get the metric value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// One computed analysis result.
///
/// A record is tagged with its [`AnalysisKind`] and associated with one or two
/// [`Attribute`]s. Scalar results live in `scalar_metrics`; nested tabular
/// results (histogram bins, contingency cells) live in `table_metrics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRecord {
    kind: AnalysisKind,
    features: Vec<Attribute>,
    scalar_metrics: Vec<ScalarMetric>,
    table_metrics: Vec<TableMetric>,
}

impl AnalysisRecord {
    /// Create a builder for constructing a record.
    #[must_use]
    pub fn builder(kind: AnalysisKind) -> AnalysisRecordBuilder {
        AnalysisRecordBuilder::new(kind)
    }

    /// Get the metric kind.
    #[must_use]
    pub const fn kind(&self) -> AnalysisKind {
        self.kind
    }

    /// Get the attributes this record was computed over (1 or 2).
    #[must_use]
    pub fn features(&self) -> &[Attribute] {
        &self.features
    }

    /// Get the first feature, if any.
    #[must_use]
    pub fn first_feature(&self) -> Option<&Attribute> {
        self.features.first()
    }

    /// Get the scalar metrics.
    #[must_use]
    pub fn scalar_metrics(&self) -> &[ScalarMetric] {
        &self.scalar_metrics
    }

    /// Look up a scalar metric value by name.
    #[must_use]
    pub fn scalar_value(&self, name: ScalarName) -> Option<f64> {
        self.scalar_metrics
            .iter()
            .find(|m| m.name() == name)
            .map(ScalarMetric::value)
    }

    /// Get the nested table metrics.
    #[must_use]
    pub fn table_metrics(&self) -> &[TableMetric] {
        &self.table_metrics
    }

    /// Get the first table metric, if any.
    #[must_use]
    pub fn first_table_metric(&self) -> Option<&TableMetric> {
        self.table_metrics.first()
    }

    /// True if this record covers a pair of attributes.
    #[must_use]
    pub fn is_pairwise(&self) -> bool {
        self.features.len() == 2
    }
}

/// Builder for [`AnalysisRecord`].
#[derive(Debug)]
pub struct AnalysisRecordBuilder {
    kind: AnalysisKind,
    features: Vec<Attribute>,
    scalar_metrics: Vec<ScalarMetric>,
    table_metrics: Vec<TableMetric>,
}

impl AnalysisRecordBuilder {
    /// Create a new builder for the given metric kind.
    #[must_use]
    pub const fn new(kind: AnalysisKind) -> Self {
        Self {
            kind,
            features: Vec::new(),
            scalar_metrics: Vec::new(),
            table_metrics: Vec::new(),
        }
    }

    /// Append a feature. Order is preserved; it matters for directional
    /// pairwise kinds such as ANOVA.
    #[must_use]
    pub fn feature(mut self, attribute: Attribute) -> Self {
        self.features.push(attribute);
        self
    }

    /// Append a scalar metric.
    #[must_use]
    pub fn scalar(mut self, name: ScalarName, value: f64) -> Self {
        self.scalar_metrics.push(ScalarMetric::new(name, value));
        self
    }

    /// Append a nested table metric.
    #[must_use]
    pub fn table_metric(mut self, metric: TableMetric) -> Self {
        self.table_metrics.push(metric);
        self
    }

    /// Build the [`AnalysisRecord`].
    #[must_use]
    pub fn build(self) -> AnalysisRecord {
        AnalysisRecord {
            kind: self.kind,
            features: self.features,
            scalar_metrics: self.scalar_metrics,
            table_metrics: self.table_metrics,
        }
    }
}
