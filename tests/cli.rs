use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd_in(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("kubesift");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn with_report(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.json"), content).unwrap();
    dir
}

#[test]
fn prints_failing_controls() {
    let dir = with_report(
        r#"{"results":[{"controls":[{"status":{"status":"passed"}},{"status":{"status":"failed"}}]}]}"#,
    );

    let expected = "[\n    {\n        \"controls\": [\n            {\n                \"status\": {\n                    \"status\": \"failed\"\n                }\n            }\n        ]\n    }\n]\n";
    cmd_in(&dir).assert().success().stdout(expected);
}

#[test]
fn all_passed_prints_empty_array() {
    let dir = with_report(r#"{"results":[{"controls":[{"status":{"status":"passed"}}]}]}"#);
    cmd_in(&dir).assert().success().stdout("[]\n");
}

#[test]
fn empty_results_prints_empty_array() {
    let dir = with_report(r#"{"results":[]}"#);
    cmd_in(&dir).assert().success().stdout("[]\n");
}

#[test]
fn malformed_json_fails_without_output() {
    let dir = with_report("{\"results\": [ {");
    cmd_in(&dir)
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: JSON error"));
}

#[test]
fn missing_results_file_fails() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("results.json"));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let dir = with_report(r#"{"results":[]}"#);
    cmd_in(&dir)
        .args(["-vv", "--no-color"])
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("Filtered passed controls"));
}

#[test]
fn rejects_input_path_argument() {
    let dir = with_report(r#"{"results":[]}"#);
    cmd_in(&dir).arg("other.json").assert().failure();
}

#[test]
fn non_utf8_report_is_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.json"), b"{\"results\":[{\"controls\":[],\"x\":\"\xff\"}]}").unwrap();
    cmd_in(&dir)
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::is_empty());
}

#[test]
fn repeated_results_key_uses_last() {
    let dir = with_report(r#"{"results":[],"results":[{"controls":[{"status":{"status":"failed"}}]}]}"#);
    cmd_in(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"failed\""));
}
