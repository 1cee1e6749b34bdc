//! CLI contract tests for the `eval`, `list` and `config` subcommands.
//!
//! Every test runs in a fresh temp directory so a stray
//! `maclaurin_config.toml` in the workspace cannot change results.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Get the CLI command, running inside `dir`
#[allow(deprecated)]
fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("maclaurin_cli").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    serde_json::from_str(&stdout).expect("Invalid JSON output")
}

#[test]
fn test_help_shows_subcommands() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("menu"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("--iterations"));
}

#[test]
fn test_eval_sin_text() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["eval", "sin", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sin(x) ≈ 0.84147098"));
}

#[test]
fn test_eval_single_iteration() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["eval", "sin", "1", "--iterations", "1"])
        .assert()
        .success()
        .stdout("sin(x) ≈ 1\n");
}

#[test]
fn test_eval_negative_argument() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["eval", "ln1p", "-0.5", "--iterations", "60"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ln(1+x) ≈ -0.693147"));
}

#[test]
fn test_eval_json_power_series() {
    let dir = TempDir::new().unwrap();
    let output = cli(&dir)
        .args(["eval", "pow1p", "0.5", "--m", "2", "--format", "json"])
        .output()
        .expect("Failed to run CLI");

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["ok"], true);
    assert_eq!(json["function"], "pow1p");
    assert_eq!(json["label"], "(1+x)^m");
    assert_eq!(json["iterations"], 10);
    assert_eq!(json["m"], 2.0);
    assert_eq!(json["result"], 2.25);
    assert!(json.get("terms").is_none());
}

#[test]
fn test_eval_text_terms_then_result() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["eval", "cos", "0", "--terms", "--iterations", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("term 1: 1\n"))
        .stdout(predicate::str::ends_with("cos(x) ≈ 1\n"));
}

#[test]
fn test_eval_json_terms() {
    let dir = TempDir::new().unwrap();
    let output = cli(&dir)
        .args(["eval", "cos", "0", "--terms", "--iterations", "3", "--format", "json"])
        .output()
        .expect("Failed to run CLI");

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["result"], 1.0);
    assert_eq!(json["terms"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_eval_out_of_domain_text() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["eval", "ln1m", "1.5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("outside the domain (-1, 1]"));
}

#[test]
fn test_eval_out_of_domain_json() {
    let dir = TempDir::new().unwrap();
    let output = cli(&dir)
        .args(["eval", "pow1m", "1", "--m", "2", "--format", "json"])
        .output()
        .expect("Failed to run CLI");

    assert_eq!(output.status.code(), Some(1));
    let json = json_stdout(&output);
    assert_eq!(json["ok"], false);
    assert_eq!(json["kind"], "out_of_domain");
}

#[test]
fn test_eval_zero_iterations_rejected() {
    let dir = TempDir::new().unwrap();
    let output = cli(&dir)
        .args(["eval", "cos", "1", "--iterations", "0", "--format", "json"])
        .output()
        .expect("Failed to run CLI");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json_stdout(&output)["kind"], "invalid_iteration_count");
}

#[test]
fn test_eval_missing_exponent() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["eval", "pow1p", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--m"));
}

#[test]
fn test_eval_unknown_series_is_usage_error() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["eval", "tan", "1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown series"));
}

#[test]
fn test_config_file_sets_iterations() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("maclaurin_config.toml"), "iterations = 1\n").unwrap();
    cli(&dir)
        .args(["eval", "cos", "1"])
        .assert()
        .success()
        .stdout("cos(x) ≈ 1\n");
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));
    assert!(dir.path().join("maclaurin_config.toml").exists());

    cli(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cli(&dir)
        .args(["config", "show", "--iterations", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iterations = 12"));
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    let output = cli(&dir)
        .args(["list", "--format", "json"])
        .output()
        .expect("Failed to run CLI");

    assert!(output.status.success());
    let json = json_stdout(&output);
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["name"], "sin");
    assert_eq!(rows[0]["domain"], Value::Null);
    assert_eq!(rows[2]["domain"], "(-1, 1]");
    assert_eq!(rows[5]["needs_exponent"], true);
}
