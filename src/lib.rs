//! # EDA-Export: CSV Export for Exploratory Data Analysis Results
//!
//! `eda-export` is the serialization layer of an EDA pipeline. An upstream
//! analysis engine computes descriptive statistics, correlation metrics,
//! categorical association metrics, histograms, and contingency tables, and
//! collects them into a [`analysis::ResultStore`]. This crate reshapes each
//! result kind into a flat or pivoted [`table::Table`] and writes one CSV file
//! per logical export under a caller-supplied directory.
//!
//! The crate does not compute statistics, decide which analyses to run, or
//! render anything; it is a pure transform-and-write layer.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use eda_export::analysis::{
//!     AnalysisKind, AnalysisRecord, Attribute, AttributeType, ResultStore, ScalarName,
//! };
//! use eda_export::export::AnalysisExporter;
//!
//! let mut store = ResultStore::new("census");
//! store.add_record(
//!     AnalysisRecord::builder(AnalysisKind::PearsonCorrelation)
//!         .feature(Attribute::new("age", AttributeType::Numerical))
//!         .feature(Attribute::new("income", AttributeType::Numerical))
//!         .scalar(ScalarName::Mean, 0.83)
//!         .build(),
//! );
//!
//! let exporter = AnalysisExporter::new(&store, "reports/census");
//! let paths = exporter.export()?;
//! assert!(paths.contains_key("PEARSON_CORRELATION"));
//! # Ok::<(), eda_export::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod analysis;
pub mod error;
pub mod export;
pub mod table;

pub use error::{Error, Result};
