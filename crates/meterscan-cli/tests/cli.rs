//! Integration tests for the meterscan binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_tokens(dir: &tempfile::TempDir, tokens: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("tokens.json");
    std::fs::write(&path, serde_json::to_string(tokens).unwrap()).unwrap();
    path
}

fn write_config(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn extract_with_flags_prints_scaled_value() {
    let dir = tempfile::tempdir().unwrap();
    let tokens = write_tokens(&dir, &["12345"]);

    Command::cargo_bin("meterscan")
        .unwrap()
        .args(["extract", tokens.to_str().unwrap(), "--digits", "5", "--decimals", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("123.45"));
}

#[test]
fn extract_reports_no_reading() {
    let dir = tempfile::tempdir().unwrap();
    let tokens = write_tokens(&dir, &["abc", "def"]);

    Command::cargo_bin("meterscan")
        .unwrap()
        .args(["extract", tokens.to_str().unwrap(), "--digits", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no reading"));
}

#[test]
fn extract_with_keyword_after_in_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let tokens = write_tokens(&dir, &["FULL TEXT", "00123", "kWh"]);

    Command::cargo_bin("meterscan")
        .unwrap()
        .args([
            "extract",
            tokens.to_str().unwrap(),
            "--keyword",
            "kwh",
            "--position",
            "after",
            "--digits",
            "5",
            "--decimals",
            "2",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": 1.23"));
}

#[test]
fn extract_requires_digits_or_source() {
    let dir = tempfile::tempdir().unwrap();
    let tokens = write_tokens(&dir, &["12345"]);

    Command::cargo_bin("meterscan")
        .unwrap()
        .args(["extract", tokens.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("either --source or --digits"));
}

#[test]
fn extract_with_named_source_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let tokens = write_tokens(&dir, &["FULL TEXT", "00123", "kWh"]);
    let config = write_config(
        &dir,
        r#"{
            "sources": [{
                "name": "electricity",
                "unit_of_measurement": "kWh",
                "keyword": "kwh",
                "keyword_position": "after",
                "expected_digits": 5,
                "decimals": 2
            }]
        }"#,
    );

    Command::cargo_bin("meterscan")
        .unwrap()
        .args([
            "--config",
            config.to_str().unwrap(),
            "extract",
            tokens.to_str().unwrap(),
            "--source",
            "electricity",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.23 kWh"));
}

#[test]
fn batch_scans_every_source_and_writes_summary() {
    let dir = tempfile::tempdir().unwrap();
    let tokens = write_tokens(&dir, &["FULL TEXT", "00123", "kWh", "Meter:", "garbage"]);
    let config = write_config(
        &dir,
        r#"{
            "sources": [
                {
                    "name": "electricity",
                    "unit_of_measurement": "kWh",
                    "keyword": "kwh",
                    "keyword_position": "after",
                    "expected_digits": 5,
                    "decimals": 2
                },
                {
                    "name": "water",
                    "keyword": "meter:",
                    "keyword_position": "before",
                    "expected_digits": 5,
                    "decimals": 0
                }
            ]
        }"#,
    );
    let summary = dir.path().join("summary.csv");

    Command::cargo_bin("meterscan")
        .unwrap()
        .args([
            "--config",
            config.to_str().unwrap(),
            "batch",
            tokens.to_str().unwrap(),
            "--summary",
            summary.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("electricity: 1.23 kWh"))
        .stdout(predicate::str::contains("water: no reading"));

    let csv = std::fs::read_to_string(&summary).unwrap();
    assert!(csv.starts_with("source,value,unit,detected_at"));
    assert!(csv.contains("electricity,1.23,kWh,"));
}

#[test]
fn config_init_writes_sample_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("config.json");

    Command::cargo_bin("meterscan")
        .unwrap()
        .args(["config", "init", "--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("electricity"));
}
