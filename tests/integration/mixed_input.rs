//! Integration tests for streams mixing structured records and plain text.

use assert_cmd::Command;
use predicates::prelude::*;

fn sift() -> Command {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/sift-test-no-config");
    cmd
}

#[test]
fn records_and_plain_text_interleaved() {
    let input = r#"Starting application...
{"type":"service.1","level":"INFO","time":"2019-12-25T01:02:03Z","message":"server started"}
Plain text log line
{"type":"event.2","time":"2019-12-25T01:02:03Z","eventName":"deploy","values":{}}
Shutting down."#;

    let output = sift()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Plain text lines pass through unchanged.
    assert!(stdout.contains("Starting application..."));
    assert!(stdout.contains("Plain text log line"));
    assert!(stdout.contains("Shutting down."));

    // Structured lines are rendered.
    assert!(stdout.contains("INFO  [2019-12-25T01:02:03Z] <nil>: server started"));
    assert!(stdout.contains("[2019-12-25T01:02:03Z] deploy ()"));
}

#[test]
fn truncated_record_passes_through() {
    let input = r#"{"type":"service.1","level":"INFO","time":"2019-12-25T01:02:03Z","mes"#;
    sift()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(format!("{input}\n"));
}

#[test]
fn unsupported_version_passes_through() {
    let input = r#"{"type":"metric.5","time":"2019-12-25T01:02:03Z","metricName":"n","metricType":"t"}"#;
    sift()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(format!("{input}\n"));
}

#[test]
fn record_with_leading_text_passes_through() {
    let input = r#"prefix {"type":"event.2","time":"2019-12-25T01:02:03Z","eventName":"e","values":{}}"#;
    sift()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(format!("{input}\n"));
}

#[test]
fn schema_mismatch_passes_through_and_reports_when_verbose() {
    // Matches the line pattern but "eventName" is missing.
    let input = r#"{"type":"event.2","time":"2019-12-25T01:02:03Z","values":{}}"#;
    sift()
        .arg("--color=never")
        .arg("--verbose")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(format!("{input}\n"))
        .stderr(predicate::str::contains("failed to decode structured record"));
}

#[test]
fn schema_mismatch_silent_by_default() {
    let input = r#"{"type":"event.2","time":"2019-12-25T01:02:03Z","values":{}}"#;
    sift()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_input_succeeds() {
    sift()
        .arg("--color=never")
        .write_stdin("")
        .assert()
        .success();
}
