//! Export Layer
//!
//! Orchestrates which metric kinds to export, reshapes each into a
//! [`crate::table::Table`], and writes one CSV file per logical export under
//! a configured output directory.

mod csv;
mod exporter;

pub use csv::write_csv;
pub use exporter::AnalysisExporter;
