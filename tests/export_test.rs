//! End-to-end export scenarios
//!
//! Builds small result stores, runs the exporter against a temp directory,
//! and checks the written CSV files cell by cell.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use eda_export::analysis::{
    AnalysisKind, AnalysisRecord, Attribute, AttributeType, ResultStore, ScalarName, TableMetric,
    TableMetricKind, TableRow,
};
use eda_export::export::AnalysisExporter;

/// Initialize test logging once; honors `RUST_LOG`.
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Parse a small CSV file into (header, rows keyed by row label).
fn read_csv(path: &Path) -> Result<(Vec<String>, HashMap<String, Vec<String>>)> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(path)?;
    let mut records = reader.records();

    let header: Vec<String> = records
        .next()
        .expect("CSV file has a header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = HashMap::new();
    for record in records {
        let record = record?;
        let mut fields = record.iter().map(str::to_string);
        let label = fields.next().expect("row has a label");
        rows.insert(label, fields.collect());
    }
    Ok((header, rows))
}

fn field_as_f64(row: &[String], header: &[String], column: &str) -> f64 {
    let idx = header.iter().position(|c| c == column).expect("column exists") - 1;
    row[idx].parse().expect("numeric field")
}

fn age_store() -> ResultStore {
    let mut store = ResultStore::new("census");
    store.add_record(
        AnalysisRecord::builder(AnalysisKind::Descriptive)
            .feature(Attribute::new("age", AttributeType::Numerical))
            .scalar(ScalarName::Mean, 30.0)
            .scalar(ScalarName::Std, 5.0)
            .build(),
    );
    store.add_record(
        AnalysisRecord::builder(AnalysisKind::Histogram)
            .feature(Attribute::new("age", AttributeType::Numerical))
            .table_metric(TableMetric::single_row(
                TableMetricKind::Histogram,
                vec!["0-20".to_string(), "20-40".to_string()],
                vec![2.0, 8.0],
            ))
            .build(),
    );
    store
}

#[test]
fn descriptive_and_histogram_scenario() -> Result<()> {
    init_tracing();
    let store = age_store();
    let dir = tempfile::tempdir()?;

    let paths = AnalysisExporter::new(&store, dir.path()).export()?;

    assert_eq!(paths.len(), 2);

    let (header, rows) = read_csv(&paths["DESCRIPTIVE-numerical"])?;
    assert_eq!(
        header[1..],
        ["TOTAL_COUNT", "MISSING", "MEAN", "STD", "MIN", "MEDIAN", "MAX"]
    );
    let age = &rows["age"];
    assert!((field_as_f64(age, &header, "MEAN") - 30.0).abs() < 1e-9);
    assert!((field_as_f64(age, &header, "STD") - 5.0).abs() < 1e-9);
    // Unset metrics are zeros, not blanks
    assert!((field_as_f64(age, &header, "MAX")).abs() < 1e-9);

    let (header, rows) = read_csv(&paths["HISTOGRAM-age"])?;
    assert_eq!(header[1..], ["0-20", "20-40"]);
    let age = &rows["age"];
    assert!((field_as_f64(age, &header, "0-20") - 2.0).abs() < 1e-9);
    assert!((field_as_f64(age, &header, "20-40") - 8.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn pearson_correlation_scenario() -> Result<()> {
    let mut store = ResultStore::new("census");
    store.add_record(
        AnalysisRecord::builder(AnalysisKind::PearsonCorrelation)
            .feature(Attribute::new("x", AttributeType::Numerical))
            .feature(Attribute::new("y", AttributeType::Numerical))
            .scalar(ScalarName::Mean, 0.8)
            .build(),
    );

    let dir = tempfile::tempdir()?;
    let paths = AnalysisExporter::new(&store, dir.path()).export()?;

    let (header, rows) = read_csv(&paths["PEARSON_CORRELATION"])?;
    assert_eq!(header, ["Pearson Correlation", "x", "y"]);
    assert!((field_as_f64(&rows["x"], &header, "y") - 0.8).abs() < 1e-9);
    assert!((field_as_f64(&rows["y"], &header, "x") - 0.8).abs() < 1e-9);
    assert!((field_as_f64(&rows["x"], &header, "x") - 1.0).abs() < 1e-9);
    assert!((field_as_f64(&rows["y"], &header, "y") - 1.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn absent_kind_produces_no_file() -> Result<()> {
    let store = age_store();
    let dir = tempfile::tempdir()?;

    let paths = AnalysisExporter::new(&store, dir.path()).export()?;

    assert!(!paths.contains_key("INFORMATION_GAIN"));
    assert!(!dir.path().join("INFORMATION_GAIN.csv").exists());
    Ok(())
}

#[test]
fn anova_stays_directional() -> Result<()> {
    let mut store = ResultStore::new("census");
    store.add_record(
        AnalysisRecord::builder(AnalysisKind::Anova)
            .feature(Attribute::new("income", AttributeType::Numerical))
            .feature(Attribute::new("city", AttributeType::Categorical))
            .scalar(ScalarName::Mean, 12.5)
            .build(),
    );

    let dir = tempfile::tempdir()?;
    let paths = AnalysisExporter::new(&store, dir.path()).export()?;

    let (header, rows) = read_csv(&paths["ANOVA"])?;
    // One recorded direction: income rows, city columns
    assert_eq!(header, ["ANOVA", "city"]);
    assert_eq!(rows.len(), 1);
    assert!((field_as_f64(&rows["income"], &header, "city") - 12.5).abs() < 1e-9);

    Ok(())
}

#[test]
fn full_run_covers_every_configured_kind() -> Result<()> {
    init_tracing();
    let mut store = age_store();
    store.add_record(
        AnalysisRecord::builder(AnalysisKind::Descriptive)
            .feature(Attribute::new("city", AttributeType::Categorical))
            .scalar(ScalarName::Cardinality, 3.0)
            .scalar(ScalarName::TotalCount, 10.0)
            .build(),
    );
    store.add_record(
        AnalysisRecord::builder(AnalysisKind::ValueCounts)
            .feature(Attribute::new("city", AttributeType::Categorical))
            .table_metric(TableMetric::single_row(
                TableMetricKind::ValueCounts,
                vec!["paris".to_string(), "lyon".to_string()],
                vec![6.0, 4.0],
            ))
            .build(),
    );
    store.add_record(
        AnalysisRecord::builder(AnalysisKind::ChiSquare)
            .feature(Attribute::new("city", AttributeType::Categorical))
            .feature(Attribute::new("job", AttributeType::Categorical))
            .scalar(ScalarName::Mean, 4.2)
            .build(),
    );
    store.add_record(
        AnalysisRecord::builder(AnalysisKind::ContingencyTable)
            .feature(Attribute::new("city", AttributeType::Categorical))
            .feature(Attribute::new("job", AttributeType::Categorical))
            .table_metric(TableMetric::new(
                TableMetricKind::ContingencyTable,
                vec!["clerk".to_string(), "nurse".to_string()],
                vec![
                    TableRow::new("paris", vec![4.0, 2.0]),
                    TableRow::new("lyon", vec![1.0, 3.0]),
                ],
            ))
            .build(),
    );

    let dir = tempfile::tempdir()?;
    let paths = AnalysisExporter::new(&store, dir.path()).export()?;

    for name in [
        "DESCRIPTIVE-numerical",
        "DESCRIPTIVE-categorical",
        "HISTOGRAM-age",
        "VALUE_COUNTS-city",
        "CHI_SQUARE",
        "CONTINGENCY_TABLE-city-job",
    ] {
        assert!(paths.contains_key(name), "missing export {name}");
        assert!(paths[name].is_file());
    }

    // Categorical descriptive table uses the categorical column extension
    let (header, rows) = read_csv(&paths["DESCRIPTIVE-categorical"])?;
    assert_eq!(header[1..], ["TOTAL_COUNT", "MISSING", "CARDINALITY"]);
    assert!((field_as_f64(&rows["city"], &header, "CARDINALITY") - 3.0).abs() < 1e-9);

    // Contingency matrix round-trips labels and values
    let (header, rows) = read_csv(&paths["CONTINGENCY_TABLE-city-job"])?;
    assert_eq!(header, ["city / job", "clerk", "nurse"]);
    assert!((field_as_f64(&rows["lyon"], &header, "nurse") - 3.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn table_descriptive_per_pair_export() -> Result<()> {
    let mut store = ResultStore::new("census");
    store.add_record(
        AnalysisRecord::builder(AnalysisKind::TableDescriptive)
            .feature(Attribute::new("income", AttributeType::Numerical))
            .feature(Attribute::new("city", AttributeType::Categorical))
            .table_metric(TableMetric::new(
                TableMetricKind::TableDescriptive,
                vec!["MEAN".to_string(), "STD".to_string()],
                vec![
                    TableRow::new("paris", vec![100.0, 10.0]),
                    TableRow::new("lyon", vec![80.0, 8.0]),
                ],
            ))
            .build(),
    );

    let dir = tempfile::tempdir()?;
    let paths = AnalysisExporter::new(&store, dir.path()).export()?;

    assert!(paths.contains_key("TABLE_DESCRIPTIVE-income-city"));
    let (header, rows) = read_csv(&paths["TABLE_DESCRIPTIVE-income-city"])?;
    assert_eq!(header, ["income / city", "MEAN", "STD"]);
    assert_eq!(rows.len(), 2);
    assert!((field_as_f64(&rows["paris"], &header, "MEAN") - 100.0).abs() < 1e-9);
    assert!((field_as_f64(&rows["lyon"], &header, "STD") - 8.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn rerunning_export_overwrites_files() -> Result<()> {
    let store = age_store();
    let dir = tempfile::tempdir()?;
    let exporter = AnalysisExporter::new(&store, dir.path());

    let first = exporter.export()?;
    let second = exporter.export()?;

    assert_eq!(first, second);
    let (_, rows) = read_csv(&second["DESCRIPTIVE-numerical"])?;
    assert_eq!(rows.len(), 1);
    Ok(())
}
