//! Integration tests for benchrelay
//!
//! Exercise the whole pipeline against an on-disk results tree: locate,
//! parse, reduce, then render the table and build the upload batch.

use benchrelay_cli::{Cli, EnvSettings, RelayConfig, upload_with_sink};
use benchrelay_report::format_table;
use benchrelay_results::{ResultsDir, collect_statistics};
use benchrelay_upload::{ResultSink, SpeedRecord, UploadError};
use clap::Parser;
use std::cell::RefCell;
use std::fs;
use std::path::Path;

fn config() -> RelayConfig {
    toml::from_str(
        r#"
        [suite]
        benchmarks = ["sum"]
        reference = "backend-a"

        [[suite.backends]]
        name = "backend-a"
        kind = "native"
        project = "proj-a"

        [[suite.backends]]
        name = "backend-b"
        kind = "compiler"
        project = "proj-b"

        [projects.proj-a]
        commit = "aaaa"

        [projects.proj-b]
        commit = "bbbb"
    "#,
    )
    .unwrap()
}

fn env() -> EnvSettings {
    EnvSettings {
        collector_url: Some("https://speed.example.io".to_string()),
        api_token: Some("secret".to_string()),
        ci_commit: None,
        environment: "test-host".to_string(),
    }
}

/// Write a modern-layout raw.csv with one (value, iters) row per entry.
fn write_raw_csv(root: &Path, benchmark: &str, backend: &str, rows: &[(f64, u64)]) {
    let dir = root.join(benchmark).join(backend).join("new");
    fs::create_dir_all(&dir).unwrap();
    let mut contents = String::from("sample_measured_value,unit,iteration_count\n");
    for (value, iters) in rows {
        contents.push_str(&format!("{value},ns,{iters}\n"));
    }
    fs::write(dir.join("raw.csv"), contents).unwrap();
}

struct RecordingSink(RefCell<Vec<SpeedRecord>>);

impl RecordingSink {
    fn new() -> Self {
        Self(RefCell::new(Vec::new()))
    }
}

impl ResultSink for RecordingSink {
    fn submit(&self, batch: &[SpeedRecord]) -> Result<(), UploadError> {
        self.0.borrow_mut().extend_from_slice(batch);
        Ok(())
    }
}

#[test]
fn table_renders_collected_statistics_with_ratio() {
    let tmp = tempfile::tempdir().unwrap();
    // backend-a mean 100ns, backend-b mean 50ns.
    write_raw_csv(tmp.path(), "sum", "backend-a", &[(1000.0, 10), (1000.0, 10)]);
    write_raw_csv(tmp.path(), "sum", "backend-b", &[(500.0, 10), (500.0, 10)]);

    let config = config();
    let results = collect_statistics(&config.suite, &ResultsDir::new(tmp.path())).unwrap();
    let table = format_table(&config.suite, &results);

    let row_b = table
        .lines()
        .find(|l| l.starts_with("sum") && l.contains("backend-b"))
        .unwrap();
    assert!(row_b.contains("50"));
    assert!(row_b.contains("0.50"));
}

#[test]
fn table_renders_dashes_for_absent_results() {
    let tmp = tempfile::tempdir().unwrap();
    write_raw_csv(tmp.path(), "sum", "backend-a", &[(1000.0, 10)]);

    let config = config();
    let results = collect_statistics(&config.suite, &ResultsDir::new(tmp.path())).unwrap();
    let table = format_table(&config.suite, &results);

    let row_b = table
        .lines()
        .find(|l| l.starts_with("sum") && l.contains("backend-b"))
        .unwrap();
    assert!(row_b.contains("--"));
}

#[test]
fn upload_batch_has_one_record_per_measured_pairing_in_seconds() {
    let tmp = tempfile::tempdir().unwrap();
    write_raw_csv(tmp.path(), "sum", "backend-a", &[(100.0, 10), (300.0, 10)]);
    write_raw_csv(tmp.path(), "sum", "backend-b", &[(500.0, 10)]);

    let cli = Cli::parse_from([
        "benchrelay",
        "--results-dir",
        tmp.path().to_str().unwrap(),
    ]);
    let sink = RecordingSink::new();
    upload_with_sink(&cli, &config(), &env(), Path::new("Cargo.lock"), &sink).unwrap();

    let batch = sink.0.into_inner();
    assert_eq!(batch.len(), 2);

    let a = batch.iter().find(|r| r.executable == "backend-a").unwrap();
    assert_eq!(a.benchmark, "sum");
    assert_eq!(a.project, "proj-a");
    assert_eq!(a.commitid, "aaaa");
    assert_eq!(a.environment, "test-host");
    // Nanosecond statistics divided by 1e9: costs 10ns and 30ns.
    assert!((a.result_value - 20.0e-9).abs() < 1e-24);
    assert!((a.min - 10.0e-9).abs() < 1e-24);
    assert!((a.max - 30.0e-9).abs() < 1e-24);

    let b = batch.iter().find(|r| r.executable == "backend-b").unwrap();
    assert!((b.result_value - 50.0e-9).abs() < 1e-24);
    assert!((b.std_dev - 0.0).abs() < f64::EPSILON);
}

#[test]
fn empty_results_tree_uploads_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let cli = Cli::parse_from([
        "benchrelay",
        "--results-dir",
        tmp.path().to_str().unwrap(),
    ]);
    let sink = RecordingSink::new();
    upload_with_sink(&cli, &config(), &env(), Path::new("Cargo.lock"), &sink).unwrap();
    assert!(sink.0.into_inner().is_empty());
}

#[test]
fn unit_mismatch_fails_the_whole_upload() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("sum").join("backend-a").join("new");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("raw.csv"),
        "sample_measured_value,unit,iteration_count\n100.0,us,10\n",
    )
    .unwrap();

    let cli = Cli::parse_from([
        "benchrelay",
        "--results-dir",
        tmp.path().to_str().unwrap(),
    ]);
    let sink = RecordingSink::new();
    let err = upload_with_sink(&cli, &config(), &env(), Path::new("Cargo.lock"), &sink)
        .unwrap_err();
    assert!(err.to_string().contains("us"));
    assert!(sink.0.into_inner().is_empty());
}
