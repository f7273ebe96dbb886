//! Error types for eda-export

use thiserror::Error;

use crate::analysis::AnalysisKind;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// eda-export error types
#[derive(Error, Debug)]
pub enum Error {
    /// An analysis record carries no features, so no table row can be labeled
    #[error("analysis record for {0} has no features")]
    MissingFeatures(AnalysisKind),

    /// An analysis record is missing the nested table metric its kind implies
    #[error("analysis record for {0} has no table metric")]
    MissingTableMetric(AnalysisKind),

    /// Tables with different column sets cannot be concatenated
    #[error("column mismatch when concatenating tables: expected {expected:?}, found {found:?}")]
    ColumnMismatch {
        /// Column labels of the first table
        expected: Vec<String>,
        /// Column labels of the mismatching table
        found: Vec<String>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
