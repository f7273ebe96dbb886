//! Analysis Result Schema
//!
//! This module provides the data structures produced by one dataset-analysis
//! run: attributes, typed analysis records, and the queryable [`ResultStore`]
//! that owns them.
//!
//! ## Schema Overview
//!
//! ```text
//! ResultStore (1) ──< AnalysisRecord (N)
//!                          │
//!                          ├── features (1 or 2 Attribute refs)
//!                          ├──< ScalarMetric (N) [name/value pairs]
//!                          └──< TableMetric (N) [nested rows × columns]
//! ```
//!
//! A record's `features` list determines its table shape downstream:
//! single-feature records become one row in an attribute-indexed table,
//! two-feature records become a pivot cell in a pairwise matrix.
//!
//! ## Usage
//!
//! ```rust
//! use eda_export::analysis::{
//!     AnalysisKind, AnalysisRecord, Attribute, AttributeType, ResultStore, ScalarName,
//! };
//!
//! let mut store = ResultStore::new("census");
//! store.add_record(
//!     AnalysisRecord::builder(AnalysisKind::Descriptive)
//!         .feature(Attribute::new("age", AttributeType::Numerical))
//!         .scalar(ScalarName::Mean, 38.2)
//!         .scalar(ScalarName::Std, 11.4)
//!         .build(),
//! );
//!
//! let records = store.records_for_attribute("age", AnalysisKind::Descriptive);
//! assert_eq!(records.len(), 1);
//! ```

mod attribute;
mod record;
mod store;
mod table_metric;

pub use attribute::{Attribute, AttributeType};
pub use record::{AnalysisKind, AnalysisRecord, AnalysisRecordBuilder, ScalarMetric, ScalarName};
pub use store::ResultStore;
pub use table_metric::{TableMetric, TableMetricKind, TableRow};
