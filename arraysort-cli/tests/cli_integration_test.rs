#[allow(deprecated)]
use assert_cmd::{Command, cargo::cargo_bin};
use predicates::prelude::*;
use std::fs;
use std::process;
use tempfile::TempDir;

/// Command for the `arraysort` binary with a clean environment
fn arraysort() -> Command {
    let mut cmd = Command::from_std(process::Command::new(cargo_bin!("arraysort")));
    cmd.env_remove("ARRAYSORT_SEED").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_flags_reports_missing_algorithm() {
    arraysort()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("flag is mandatory: --algorithm"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_missing_size() {
    arraysort()
        .arg("--algorithm")
        .arg("HeapSort")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("flag is mandatory: --size"));
}

#[test]
fn test_zero_size() {
    arraysort()
        .args(["--algorithm", "HeapSort", "--size", "0"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid size: 0"));
}

#[test]
fn test_unknown_algorithm() {
    arraysort()
        .args(["--algorithm", "BogoSort", "--size", "10"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "invalid algorithm specified: BogoSort",
        ));
}

#[test]
fn test_inverted_value_range() {
    arraysort()
        .args(["-a", "MergeSort", "-s", "10", "--min-value", "9", "--max-value", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value range"));
}

#[test]
fn test_every_algorithm_prints_report() {
    for name in [
        "TrivialSort",
        "BubbleSort",
        "InsertionSort",
        "MergeSort",
        "HeapSort",
        "QuickSort",
    ] {
        arraysort()
            .args(["--algorithm", name, "--size", "500", "--seed", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Algorithm: {}", name)))
            .stdout(predicate::str::contains("Problem Size: 500"))
            .stdout(predicate::str::contains("Min Value: "))
            .stdout(predicate::str::contains("Max Value: "))
            .stdout(predicate::str::is_match(r"Execution Time: \d+s \d+ms \d+us").unwrap());
    }
}

#[test]
fn test_report_is_five_lines() {
    let output = arraysort()
        .args(["-a", "QuickSort", "-s", "1000"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn test_single_element_min_equals_max() {
    let output = arraysort()
        .args(["-a", "BubbleSort", "-s", "1", "--min-value", "7", "--max-value", "7"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Min Value: 7"));
    assert!(stdout.contains("Max Value: 7"));
}

#[test]
fn test_seed_is_reproducible() {
    let run = |algorithm: &str| {
        let output = arraysort()
            .args(["-a", algorithm, "-s", "300", "--seed", "12345", "-f", "json"])
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        (report["min"].as_u64(), report["max"].as_u64())
    };

    assert_eq!(run("HeapSort"), run("InsertionSort"));
}

#[test]
fn test_seed_from_environment() {
    let output = arraysort()
        .env("ARRAYSORT_SEED", "99")
        .args(["-a", "MergeSort", "-s", "10", "-f", "json"])
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["seed"].as_u64(), Some(99));
}

#[test]
fn test_json_format() {
    let output = arraysort()
        .args(["-a", "MergeSort", "-s", "64", "--max-value", "1000", "-f", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["algorithm"], "MergeSort");
    assert_eq!(report["size"], 64);
    assert!(report["max"].as_u64().unwrap() <= 1000);
    assert!(report["min"].as_u64() <= report["max"].as_u64());
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.json");

    arraysort()
        .args(["-a", "HeapSort", "-s", "50", "--seed", "8"])
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: HeapSort"));

    let content = fs::read_to_string(&path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["algorithm"], "HeapSort");
    assert_eq!(report["seed"], 8);
}

#[test]
fn test_output_file_in_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("report.json");

    arraysort()
        .args(["-a", "HeapSort", "-s", "5"])
        .arg("--output")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write report"));
}

#[test]
fn test_list() {
    arraysort()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available algorithms:"))
        .stdout(predicate::str::contains("TrivialSort"))
        .stdout(predicate::str::contains("QuickSort"))
        .stdout(predicate::str::contains("(stable)"));
}

#[test]
fn test_negative_size_rejected_by_parser() {
    arraysort()
        .args(["-a", "HeapSort", "-s", "-3"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}
