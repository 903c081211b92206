//! Integration tests for color output control.

use assert_cmd::Command;
use std::io::Write as _;

fn sift() -> Command {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/sift-test-no-config");
    cmd.env_remove("NO_COLOR");
    cmd
}

const ERROR_RECORD: &str =
    r#"{"type":"service.1","level":"ERROR","time":"2019-12-25T01:02:03Z","message":"boom"}"#;

#[test]
fn always_emits_ansi_escapes() {
    let output = sift()
        .arg("--color=always")
        .write_stdin(ERROR_RECORD)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\u{1b}["), "expected ANSI escapes: {stdout:?}");
    assert!(stdout.contains("boom"));
}

#[test]
fn never_emits_no_escapes() {
    let output = sift()
        .arg("--color=never")
        .write_stdin(ERROR_RECORD)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\u{1b}["), "unexpected escapes: {stdout:?}");
    assert_eq!(stdout, "ERROR [2019-12-25T01:02:03Z] <nil>: boom\n");
}

#[test]
fn auto_disables_color_when_not_a_tty() {
    // Piped stdout, so auto must behave like never.
    let output = sift().write_stdin(ERROR_RECORD).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\u{1b}["));
}

#[test]
fn plain_text_is_never_styled() {
    let output = sift()
        .arg("--color=always")
        .write_stdin("just some text")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "just some text\n");
}

#[test]
fn config_file_color_overridden_by_flag() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "color = \"always\"").unwrap();

    let output = sift()
        .arg("--color=never")
        .arg("--config")
        .arg(file.path())
        .write_stdin(ERROR_RECORD)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\u{1b}["), "flag must win over config file");
}

#[test]
fn config_file_color_applies_without_flag() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "color = \"always\"").unwrap();

    let output = sift()
        .arg("--config")
        .arg(file.path())
        .write_stdin(ERROR_RECORD)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\u{1b}["), "config file color=always must apply");
}
