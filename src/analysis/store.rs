//! Result Store - in-memory holder for one dataset-analysis run
//!
//! This module provides the queryable collection of analysis records the
//! export layer reads from. The upstream computation engine fills the store;
//! exporters only ever borrow from it.

use chrono::{DateTime, Utc};

use super::{AnalysisKind, AnalysisRecord, AttributeType};

/// In-memory store for the analysis results of one dataset run.
///
/// ## Design
///
/// Records are held in insertion order in a single vector; the two query
/// operations filter by metric kind and, optionally, by attribute name. The
/// store is append-only: once the upstream run has populated it, consumers
/// treat it as immutable.
#[derive(Debug)]
pub struct ResultStore {
    dataset_name: String,
    created_at: DateTime<Utc>,
    config: Option<serde_json::Value>,
    records: Vec<AnalysisRecord>,
}

impl ResultStore {
    /// Create a new empty store for the named dataset.
    #[must_use]
    pub fn new(dataset_name: impl Into<String>) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            created_at: Utc::now(),
            config: None,
            records: Vec::new(),
        }
    }

    /// Attach the upstream run configuration.
    #[must_use]
    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Get the dataset name.
    #[must_use]
    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    /// Get the run creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the upstream run configuration, if any.
    #[must_use]
    pub const fn config(&self) -> Option<&serde_json::Value> {
        self.config.as_ref()
    }

    /// Check if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the number of records in the store.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Add an analysis record to the store.
    pub fn add_record(&mut self, record: AnalysisRecord) {
        self.records.push(record);
    }

    /// Get all records of a given metric kind, across any attributes.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use eda_export::analysis::{
    ///     AnalysisKind, AnalysisRecord, Attribute, AttributeType, ResultStore, ScalarName,
    /// };
    ///
    /// let mut store = ResultStore::new("census");
    /// store.add_record(
    ///     AnalysisRecord::builder(AnalysisKind::ChiSquare)
    ///         .feature(Attribute::new("city", AttributeType::Categorical))
    ///         .feature(Attribute::new("job", AttributeType::Categorical))
    ///         .scalar(ScalarName::Mean, 4.2)
    ///         .build(),
    /// );
    ///
    /// assert_eq!(store.records_for_kind(AnalysisKind::ChiSquare).len(), 1);
    /// assert!(store.records_for_kind(AnalysisKind::Anova).is_empty());
    /// ```
    #[must_use]
    pub fn records_for_kind(&self, kind: AnalysisKind) -> Vec<&AnalysisRecord> {
        self.records.iter().filter(|r| r.kind() == kind).collect()
    }

    /// Get all records of a given kind that reference the named attribute.
    #[must_use]
    pub fn records_for_attribute(&self, attribute_name: &str, kind: AnalysisKind) -> Vec<&AnalysisRecord> {
        self.records
            .iter()
            .filter(|r| r.kind() == kind && r.features().iter().any(|f| f.name() == attribute_name))
            .collect()
    }

    /// Get the names of all numerical attributes seen across records, sorted.
    #[must_use]
    pub fn numerical_attributes(&self) -> Vec<String> {
        self.attributes_of_type(AttributeType::Numerical)
    }

    /// Get the names of all categorical attributes seen across records, sorted.
    #[must_use]
    pub fn categorical_attributes(&self) -> Vec<String> {
        self.attributes_of_type(AttributeType::Categorical)
    }

    fn attributes_of_type(&self, attribute_type: AttributeType) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .flat_map(AnalysisRecord::features)
            .filter(|a| a.attribute_type() == attribute_type)
            .map(|a| a.name().to_string())
            .collect();

        // Sorted, deduplicated names keep export order deterministic
        names.sort();
        names.dedup();
        names
    }
}
