//! Integration tests for per-kind display filtering.

use assert_cmd::Command;
use std::io::Write as _;

fn sift() -> Command {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/sift-test-no-config");
    cmd
}

const MIXED: &str = r#"plain line
{"type":"service.1","level":"INFO","time":"2019-12-25T01:02:03Z","message":"svc"}
{"type":"metric.1","time":"2019-12-25T01:02:03Z","metricName":"m","metricType":"gauge"}
{"type":"trace.1","time":"2019-12-25T01:02:03Z","span":{"traceId":"t","id":"i","name":"n","duration":1}}
{"type":"event.2","time":"2019-12-25T01:02:03Z","eventName":"e","values":{}}"#;

#[test]
fn hide_flag_drops_named_kinds() {
    let output = sift()
        .arg("--color=never")
        .arg("--hide=metric,trace")
        .write_stdin(MIXED)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("plain line"));
    assert!(stdout.contains("svc"));
    assert!(stdout.contains("] e ()"));
    assert!(!stdout.contains("METRIC"), "hidden metric must not appear");
    assert!(!stdout.contains("traceId"), "hidden trace must not appear");
}

#[test]
fn hide_flag_rejects_unknown_kind() {
    sift()
        .arg("--hide=nonsense")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid record kind"));
}

#[test]
fn config_file_show_table_honored() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[show]\nevent = false").unwrap();

    let output = sift()
        .arg("--color=never")
        .arg("--config")
        .arg(file.path())
        .write_stdin(MIXED)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains("] e ()"), "event hidden by config file");
    assert!(stdout.contains("METRIC"));
    assert!(stdout.contains("svc"));
}

#[test]
fn hidden_kind_line_removed_entirely() {
    let input = r#"{"type":"metric.1","time":"2019-12-25T01:02:03Z","metricName":"m","metricType":"gauge"}"#;
    sift()
        .arg("--color=never")
        .arg("--hide=metric")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}
