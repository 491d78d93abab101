//! Integration tests for the censored-digits CLI.
//!
//! These tests run the actual binary against files in `tests/data`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_cli(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("censored-digits").unwrap();
    let assert = cmd
        .env_remove("CENSOR_STRATEGY")
        .env_remove("CENSOR_CHUNK_SIZE")
        .args(args)
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_short_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "short.txt", "3.1415926535\n");

    let output = run_cli(&[&input]);
    assert_eq!(output, "3.14*59*6**5");
}

#[test]
fn test_every_strategy_same_output() {
    let input = test_data_path("pi10k.txt");
    let baseline = run_cli(&[&input]);

    assert_eq!(baseline.len(), 10_002);
    assert!(baseline.starts_with("3.14*59*6**589*9**38*6*6**3"));
    assert_eq!(baseline.matches('*').count(), 4511);

    for strategy in ["inplace", "inplace-sync", "iterative", "iterative-string"] {
        let output = run_cli(&["--strategy", strategy, &input]);
        assert!(output == baseline, "{} differs", strategy);
    }
}

#[test]
fn test_chunk_size_flag() {
    let input = test_data_path("pi10k.txt");
    let baseline = run_cli(&[&input]);

    for chunk_size in ["1", "7", "10002"] {
        let output = run_cli(&["--chunk-size", chunk_size, &input]);
        assert!(output == baseline, "chunk size {} differs", chunk_size);
    }
}

#[test]
fn test_strategy_from_env() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "short.txt", "3.9876");

    let mut cmd = Command::cargo_bin("censored-digits").unwrap();
    cmd.env("CENSOR_STRATEGY", "iterative-string")
        .arg(&input)
        .assert()
        .success()
        .stdout("3.9***");
}

#[test]
fn test_report_mode() {
    let output = run_cli(&["--report", "--iterations", "2", &test_data_path("pi10k.txt")]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "strategy,censored,bytes_written,writes,elapsed_micros");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("inplace,4511,10002,4,"));
    assert!(lines[2].starts_with("inplace-sync,4511,10002,4,"));
    assert!(lines[3].starts_with("iterative,4511,10002,2,"));
    assert!(lines[4].starts_with("iterative-string,4511,10002,2,"));
}

#[test]
fn test_invalid_input_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "e.txt", "2.718281828");

    let mut cmd = Command::cargo_bin("censored-digits").unwrap();
    cmd.arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must start with '3.'"));
}

#[test]
fn test_zero_chunk_size_error() {
    let mut cmd = Command::cargo_bin("censored-digits").unwrap();
    cmd.env_remove("CENSOR_CHUNK_SIZE")
        .args(["--chunk-size", "0", &test_data_path("pi10k.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_unknown_strategy_error() {
    let mut cmd = Command::cargo_bin("censored-digits").unwrap();
    cmd.args(["--strategy", "quantum", &test_data_path("pi10k.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("censored-digits").unwrap();
    cmd.arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("censored-digits").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<INPUT>"));
}
