//! End-to-end tests for the salescast binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A 24-month constant-sales CSV, two rows per month
fn write_sales_csv(dir: &TempDir) -> std::path::PathBuf {
    let mut csv = String::from("Order Date,Sales,Category\n");
    for year in [2023, 2024] {
        for month in 1..=12 {
            csv.push_str(&format!("{year}-{month:02}-05,400.00,Furniture\n"));
            csv.push_str(&format!("{year}-{month:02}-20,600.00,Office\n"));
        }
    }
    let path = dir.path().join("sales.csv");
    fs::write(&path, csv).unwrap();
    path
}

fn salescast(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("salescast").unwrap();
    // Keep settings inside the test sandbox
    cmd.env("SALESCAST_DATA_DIR", dir.path().join("config"));
    cmd
}

#[test]
fn forecast_prints_metrics_and_table() {
    let dir = TempDir::new().unwrap();
    let csv = write_sales_csv(&dir);

    salescast(&dir)
        .args(["forecast"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Average Monthly Sales"))
        .stdout(predicate::str::contains("Model Accuracy"))
        .stdout(predicate::str::contains("Projected Total"))
        .stdout(predicate::str::contains("Lower Bound"));
}

#[test]
fn forecast_export_round_trips() {
    let dir = TempDir::new().unwrap();
    let csv = write_sales_csv(&dir);
    let out = dir.path().join("forecast.csv");

    salescast(&dir)
        .args(["forecast"])
        .arg(&csv)
        .args(["--horizon", "8", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Forecast exported to"));

    let exported = fs::read_to_string(&out).unwrap();
    let mut lines = exported.lines();
    assert_eq!(lines.next().unwrap(), "Date,Forecast,Lower Bound,Upper Bound");
    assert_eq!(lines.count(), 8);
}

#[test]
fn missing_fixed_name_column_is_a_schema_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("odd.csv");
    fs::write(&path, "Order Date,Sales_Value\n2024-01-05,100\n").unwrap();

    salescast(&dir)
        .args(["forecast"])
        .arg(&path)
        .args(["--sales-column", "Sales"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column(s): Sales"));
}

#[test]
fn filter_excluding_all_rows_halts_before_forecast() {
    let dir = TempDir::new().unwrap();
    let csv = write_sales_csv(&dir);

    salescast(&dir)
        .args(["forecast"])
        .arg(&csv)
        .args(["--category-column", "Category", "--category", "Technology"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No usable data"));
}

#[test]
fn horizon_outside_range_is_rejected_at_parse_time() {
    let dir = TempDir::new().unwrap();
    let csv = write_sales_csv(&dir);

    salescast(&dir)
        .args(["forecast"])
        .arg(&csv)
        .args(["--horizon", "36"])
        .assert()
        .failure();
}

#[test]
fn inspect_reports_detected_columns() {
    let dir = TempDir::new().unwrap();
    let csv = write_sales_csv(&dir);

    salescast(&dir)
        .args(["inspect"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Order Date"))
        .stdout(predicate::str::contains("date (detected)"))
        .stdout(predicate::str::contains("sales (detected)"));
}

#[test]
fn garbage_input_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(&path, "Order Date,Sales\n\"2024-01-05,100\n").unwrap();

    salescast(&dir)
        .args(["forecast"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}
