//! Integration tests for rendering each structured record kind.

use assert_cmd::Command;

fn sift() -> Command {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/sift-test-no-config");
    cmd
}

fn render(input: &str) -> String {
    let output = sift()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn service_record_rendered() {
    let input = r#"{"type":"service.1","level":"ERROR","time":"2019-05-09T15:32:37.692Z","origin":"ROOT","thread":"main","message":"test good {}","params":{"good":":-)"},"unsafeParams":{},"tags":{}}"#;
    let stdout = render(input);
    assert_eq!(
        stdout,
        "ERROR [2019-05-09T15:32:37.692Z] ROOT: test good {} (good: :-))\n"
    );
}

#[test]
fn request_record_rendered() {
    let input = r#"{"type":"request.2","time":"2019-12-25T01:02:03Z","method":"GET","protocol":"http","path":"/some/path/{param}","params":{"param":"value"},"status":203,"responseSize":40,"duration":99}"#;
    let stdout = render(input);
    assert_eq!(
        stdout,
        "[2019-12-25T01:02:03Z] \"GET /some/path/value http\" 203 40 99\n"
    );
}

#[test]
fn event_record_rendered() {
    let input = r#"{"type":"event.2","time":"2019-05-24T16:40:21.049Z","eventName":"com.jvm.crash","values":{"numJvmErrorLogs":"1"},"unsafeParams":{},"tags":{}}"#;
    let stdout = render(input);
    assert_eq!(
        stdout,
        "[2019-05-24T16:40:21.049Z] com.jvm.crash (numJvmErrorLogs: 1)\n"
    );
}

#[test]
fn metric_record_rendered() {
    let input = r#"{"type":"metric.1","time":"2019-12-25T01:02:03Z","metricName":"name","metricType":"type","values":{"value":3},"tags":{"tag":"foo"},"unsafeParams":{"unsafe":"bad"}}"#;
    let stdout = render(input);
    assert_eq!(
        stdout,
        "[2019-12-25T01:02:03Z] METRIC name type (value: 3) (tag: foo) (unsafe: bad)\n"
    );
}

#[test]
fn trace_record_rendered() {
    let input = r#"{"type":"trace.1","time":"2019-12-25T01:02:03Z","unsafeParams":{},"span":{"traceId":"abdefghijklmno","id":"id","name":"name","timestamp":999,"duration":31}}"#;
    let stdout = render(input);
    assert_eq!(
        stdout,
        "[2019-12-25T01:02:03Z] traceId: abdefghijklmno id: id name: name duration: 31 microseconds\n"
    );
}

#[test]
fn wrapped_record_rendered_like_its_payload() {
    let inner = r#"{"type":"service.1","level":"INFO","time":"2019-12-25T01:02:03Z","origin":"com.origin","message":"hello"}"#;
    let input = format!(
        r#"{{"type":"wrapped.1","entityName":"foo","entityVersion":"1.2.3","payload":{{"type":"serviceLogV1","serviceLogV1":{inner}}}}}"#
    );
    let stdout = render(&input);
    assert_eq!(stdout, "INFO  [2019-12-25T01:02:03Z] com.origin: hello\n");
}

#[test]
fn audit_record_passes_through_as_plain_text() {
    let input = r#"{"type":"audit.2","time":"2019-12-25T01:02:03Z","name":"login","result":"SUCCESS"}"#;
    let stdout = render(input);
    // No built-in renderer: the raw line survives untouched.
    assert_eq!(stdout, format!("{input}\n"));
}
