//! CSV serialization for exported tables

use std::path::Path;

use crate::table::Table;
use crate::Result;

/// Write a table to a CSV file.
///
/// The header row is the corner label (empty when unset) followed by the
/// column labels; each data row is the row label followed by the rendered
/// cells. Quoting follows RFC 4180 via the `csv` crate. An existing file at
/// `path` is overwritten.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(table.column_count() + 1);
    header.push(table.corner_label().unwrap_or("").to_string());
    header.extend(table.columns().iter().cloned());
    writer.write_record(&header)?;

    for (label, cells) in table.iter_rows() {
        let mut record = Vec::with_capacity(cells.len() + 1);
        record.push(label.to_string());
        record.extend(cells.iter().map(ToString::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
