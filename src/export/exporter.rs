//! Analysis Exporter - writes one CSV file per configured export

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use super::write_csv;
use crate::analysis::{AnalysisKind, AnalysisRecord, AttributeType, ResultStore};
use crate::table::{
    descriptive_row, nested_table, ordered_pair_table, single_row_table, symmetric_pair_table,
    Cell, DescriptiveColumns, Table,
};
use crate::{Error, Result};

/// Exports every configured metric kind of a [`ResultStore`] to CSV files.
///
/// One file is written per logical export name under the output directory:
///
/// - `DESCRIPTIVE-numerical` / `DESCRIPTIVE-categorical`: per-attribute
///   descriptive rows, concatenated
/// - `HISTOGRAM-<attr>` per numerical attribute
/// - `VALUE_COUNTS-<attr>` per categorical attribute
/// - `PEARSON_CORRELATION`, `INFORMATION_GAIN`, `CHI_SQUARE`: symmetric
///   pairwise matrices
/// - `ANOVA`: ordered (directional) pairwise matrix
/// - `CONTINGENCY_TABLE-<a>-<b>` / `TABLE_DESCRIPTIVE-<a>-<b>` per
///   attribute pair
///
/// A kind with no records in the store produces no file and no map entry.
/// Re-running overwrites prior files; file writes are independent, so a
/// mid-export failure leaves already-written files intact.
#[derive(Debug)]
pub struct AnalysisExporter<'a> {
    store: &'a ResultStore,
    output_dir: PathBuf,
    descriptive_columns: DescriptiveColumns,
}

impl<'a> AnalysisExporter<'a> {
    /// Create an exporter for the given store and output directory.
    #[must_use]
    pub fn new(store: &'a ResultStore, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            output_dir: output_dir.into(),
            descriptive_columns: DescriptiveColumns::DEFAULT,
        }
    }

    /// Override the descriptive column ordering.
    #[must_use]
    pub const fn with_descriptive_columns(mut self, columns: DescriptiveColumns) -> Self {
        self.descriptive_columns = columns;
        self
    }

    /// Export all configured metric kinds and return the mapping from export
    /// name to the path of the written CSV file.
    ///
    /// Creates the output directory (including parents) if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, a file write
    /// fails, or a record is malformed (e.g. a pairwise nested-table record
    /// without its table metric). Already-written files are left in place.
    pub fn export(&self) -> Result<BTreeMap<String, PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let mut paths = BTreeMap::new();

        self.export_descriptive(&mut paths)?;
        self.export_pair_metrics(&mut paths)?;
        self.export_nested_tables(&mut paths)?;

        info!(
            dataset = self.store.dataset_name(),
            exports = paths.len(),
            output_dir = %self.output_dir.display(),
            "analysis export complete"
        );
        Ok(paths)
    }

    /// Per-attribute exports: the two concatenated DESCRIPTIVE tables plus
    /// one HISTOGRAM / VALUE_COUNTS table per attribute.
    fn export_descriptive(&self, paths: &mut BTreeMap<String, PathBuf>) -> Result<()> {
        let groups = [
            (
                "numerical",
                AttributeType::Numerical,
                self.store.numerical_attributes(),
                AnalysisKind::Histogram,
            ),
            (
                "categorical",
                AttributeType::Categorical,
                self.store.categorical_attributes(),
                AnalysisKind::ValueCounts,
            ),
        ];

        for (type_label, attribute_type, attributes, detail_kind) in groups {
            let mut rows = Vec::new();

            for attribute in &attributes {
                let descriptive = self
                    .store
                    .records_for_attribute(attribute, AnalysisKind::Descriptive);
                match descriptive.first() {
                    // An attribute tagged with conflicting types across records
                    // lists in both groups; its row belongs only where the
                    // record's own type agrees, otherwise the column sets of
                    // the concatenated rows would diverge.
                    Some(record)
                        if record
                            .first_feature()
                            .is_some_and(|f| f.attribute_type() == attribute_type) =>
                    {
                        rows.push(descriptive_row(attribute, record, &self.descriptive_columns)?);
                    }
                    Some(_) => {
                        debug!(
                            %attribute,
                            group = type_label,
                            "descriptive record type disagrees with group, skipping row"
                        );
                    }
                    None => {
                        debug!(%attribute, "no DESCRIPTIVE record, skipping row");
                    }
                }

                let detail = self.store.records_for_attribute(attribute, detail_kind);
                if let Some(record) = detail.first() {
                    let table = single_row_table(record)?;
                    self.write_table(&format!("{detail_kind}-{attribute}"), &table, paths)?;
                } else {
                    debug!(%attribute, kind = %detail_kind, "no per-attribute record, skipping");
                }
            }

            let combined = Table::concat(rows)?;
            self.write_table(&format!("DESCRIPTIVE-{type_label}"), &combined, paths)?;
        }

        Ok(())
    }

    /// Pairwise metric exports pivoted into attribute × attribute matrices.
    fn export_pair_metrics(&self, paths: &mut BTreeMap<String, PathBuf>) -> Result<()> {
        let symmetric = [
            (AnalysisKind::PearsonCorrelation, 1.0, "Pearson Correlation"),
            (AnalysisKind::InformationGain, 0.0, "Information-Gain"),
            (AnalysisKind::ChiSquare, 0.0, "Chi-Square"),
        ];

        for (kind, diagonal, corner_label) in symmetric {
            let records = self.store.records_for_kind(kind);
            let table = symmetric_pair_table(&records, &Cell::Number(diagonal), corner_label);
            self.write_table(kind.as_str(), &table, paths)?;
        }

        let records = self.store.records_for_kind(AnalysisKind::Anova);
        let table = ordered_pair_table(&records, &Cell::from("NA"), "ANOVA");
        self.write_table(AnalysisKind::Anova.as_str(), &table, paths)?;

        Ok(())
    }

    /// One full-matrix export per two-feature nested-table record.
    fn export_nested_tables(&self, paths: &mut BTreeMap<String, PathBuf>) -> Result<()> {
        for kind in [AnalysisKind::ContingencyTable, AnalysisKind::TableDescriptive] {
            for record in self.store.records_for_kind(kind) {
                let Some((a, b)) = pair_names(record) else {
                    debug!(kind = %kind, "skipping nested-table record without two features");
                    continue;
                };
                let metric = record
                    .first_table_metric()
                    .ok_or(Error::MissingTableMetric(kind))?;

                let mut table = nested_table(metric);
                table.set_corner_label(format!("{a} / {b}"));
                self.write_table(&format!("{kind}-{a}-{b}"), &table, paths)?;
            }
        }
        Ok(())
    }

    /// Write one table and record its path, skipping empty tables.
    fn write_table(
        &self,
        name: &str,
        table: &Table,
        paths: &mut BTreeMap<String, PathBuf>,
    ) -> Result<()> {
        if table.is_empty() {
            debug!(export = name, "nothing to export");
            return Ok(());
        }

        let path = self.output_dir.join(format!("{name}.csv"));
        write_csv(table, &path)?;
        info!(export = name, path = %path.display(), rows = table.row_count(), "wrote export");
        paths.insert(name.to_string(), path);
        Ok(())
    }
}

fn pair_names(record: &AnalysisRecord) -> Option<(&str, &str)> {
    match record.features() {
        [a, b] => Some((a.name(), b.name())),
        _ => None,
    }
}
