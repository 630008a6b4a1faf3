//! Integration tests for the full ETL run
//!
//! These run the complete pipeline on `testdata/sleep_raw.csv` and verify the
//! invariants of the cleaned table.

#![expect(clippy::unwrap_used)]

use polars::prelude::*;
use sleep_etl::config::EtlConfig;
use sleep_etl::driver::run_etl;
use sleep_etl::error::EtlError;
use sleep_etl::io::load_table;
use sleep_etl::pipeline::clean_table;
use sleep_etl::summary::summarize;
use std::path::{Path, PathBuf};

const FIXTURE: &str = "testdata/sleep_raw.csv";

fn cleaned() -> DataFrame {
    let raw = load_table(Path::new(FIXTURE)).expect("fixture loads");
    clean_table(raw).expect("pipeline runs")
}

fn text(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_owned))
        .collect()
}

fn numbers(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

fn row_of(df: &DataFrame, person_id: &str) -> usize {
    text(df, "person_id")
        .iter()
        .position(|id| id.as_deref() == Some(person_id))
        .expect("person present")
}

#[test]
fn test_rerun_is_identical() {
    let first = cleaned();
    let second = cleaned();
    assert!(first.equals_missing(&second), "pipeline must be deterministic");
}

#[test]
fn test_column_names_are_snake_case() {
    let df = cleaned();
    for name in df.get_column_names() {
        assert!(
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "bad column name {name:?}"
        );
    }
    assert_eq!(df.width(), 19);
}

#[test]
fn test_gender_domain() {
    let df = cleaned();
    let gender = text(&df, "gender");
    assert!(
        gender
            .iter()
            .all(|g| matches!(g.as_deref(), None | Some("M" | "F")))
    );
    assert_eq!(gender.get(row_of(&df, "3")).cloned().flatten().as_deref(), Some("F"));
    assert_eq!(gender.get(row_of(&df, "4")).cloned().flatten(), None);
}

#[test]
fn test_sleep_disorder_consistency() {
    let df = cleaned();
    let disorder = text(&df, "sleep_disorder");
    let flag: Vec<Option<i32>> = df
        .column("has_sleep_disorder")
        .unwrap()
        .as_materialized_series()
        .i32()
        .unwrap()
        .into_iter()
        .collect();

    for (d, f) in disorder.iter().zip(&flag) {
        let d = d.as_deref().expect("sleep_disorder is never missing");
        assert_eq!(*f, Some(i32::from(d != "None")), "mismatch for {d}");
    }
    assert_eq!(
        disorder.get(row_of(&df, "3")).cloned().flatten().as_deref(),
        Some("Sleep Apnea")
    );
    assert_eq!(
        disorder.get(row_of(&df, "4")).cloned().flatten().as_deref(),
        Some("None")
    );
}

#[test]
fn test_blood_pressure_split() {
    let df = cleaned();
    let sbp = numbers(&df, "sbp");
    let dbp = numbers(&df, "dbp");

    let normal = row_of(&df, "2");
    assert_eq!((sbp.get(normal), dbp.get(normal)), (Some(&Some(125.0)), Some(&Some(80.0))));

    let high = row_of(&df, "3");
    assert_eq!((sbp.get(high), dbp.get(high)), (Some(&None), Some(&Some(80.0))));

    let garbage = row_of(&df, "4");
    assert_eq!((sbp.get(garbage), dbp.get(garbage)), (Some(&None), Some(&None)));

    let original = text(&df, "blood_pressure");
    assert_eq!(original.get(high).cloned().flatten().as_deref(), Some("300/80"));
}

#[test]
fn test_range_repair_keeps_record() {
    let df = cleaned();
    let idx = row_of(&df, "3");
    assert_eq!(numbers(&df, "age").get(idx), Some(&None));
    assert_eq!(numbers(&df, "heart_rate").get(idx), Some(&Some(85.0)));
    assert_eq!(
        text(&df, "occupation").get(idx).cloned().flatten().as_deref(),
        Some("Nurse")
    );

    let steps = numbers(&df, "daily_steps");
    assert_eq!(steps.get(row_of(&df, "5")), Some(&None));
}

#[test]
fn test_person_id_unique_after_trim() {
    let df = cleaned();
    let ids: Vec<String> = text(&df, "person_id").into_iter().flatten().collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);

    // The first "4" wins over " 4 ", so its values are kept.
    let bmi = text(&df, "bmi_category");
    assert_eq!(
        bmi.get(row_of(&df, "4")).cloned().flatten().as_deref(),
        Some("Overweight")
    );
}

#[test]
fn test_sleep_duration_buckets() {
    let df = cleaned();
    let groups = text(&df, "sleep_duration_group");
    let group_of = |id: &str| groups.get(row_of(&df, id)).cloned().flatten();

    assert_eq!(group_of("3").as_deref(), Some("<5h"));
    assert_eq!(group_of("4").as_deref(), Some("5-7h"));
    assert_eq!(group_of("6").as_deref(), Some("7-9h"));
    assert_eq!(group_of("5").as_deref(), Some("9h+"));
}

#[test]
fn test_summary_matches_table() {
    let df = cleaned();
    let summary = summarize(&df).unwrap();

    assert_eq!(summary.rows, 6);
    assert_eq!(summary.columns, 19);
    let rate = summary.disorder_rate.unwrap();
    assert!((rate - 2.0 / 6.0).abs() < 1e-12, "rate was {rate}");
    assert!(summary.to_string().contains("Sleep disorder rate: 0.3333 (33.33%)"));

    let steps = summary
        .stats
        .iter()
        .find(|s| s.name == "daily_steps")
        .unwrap();
    assert_eq!(steps.min, Some(3000.0));
    assert_eq!(steps.median, Some(5000.0));
    assert_eq!(steps.max, Some(10000.0));

    let duration = summary
        .stats
        .iter()
        .find(|s| s.name == "sleep_duration")
        .unwrap();
    assert!((duration.median.unwrap() - 6.15).abs() < 1e-9);
}

#[test]
fn test_run_etl_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = EtlConfig {
        input: PathBuf::from(FIXTURE),
        output: dir.path().join("out").join("clean_sleep.csv"),
        summary_json: Some(dir.path().join("summary.json")),
        log_dir: None,
    };

    let outcome = run_etl(&config).unwrap();
    assert_eq!(outcome.report.rows_before, 8);
    assert_eq!(outcome.report.rows_after, 6);
    assert_eq!(outcome.summary.rows, 6);

    let written = load_table(&outcome.output).unwrap();
    assert_eq!(written.shape(), (6, 19));
    let header: Vec<String> = written
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(header.first().map(String::as_str), Some("person_id"));
    assert!(header.contains(&"stress_group".to_owned()));

    let json = std::fs::read_to_string(dir.path().join("summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["rows"], 6);
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("clean.csv");
    let config = EtlConfig {
        input: dir.path().join("absent.csv"),
        output: output.clone(),
        ..Default::default()
    };

    let err = run_etl(&config).unwrap_err();
    assert!(matches!(err, EtlError::InputMissing { .. }));
    assert!(!output.exists(), "nothing is written when loading fails");
}
