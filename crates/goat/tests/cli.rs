//! End-to-end tests of the `goat` binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn goat() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_goat"));
    cmd.env_remove("GOAT_LOG");
    cmd
}

fn run_with_stdin(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The child may exit without reading stdin; a broken pipe is not a test failure.
    if let Err(e) = child.stdin.take().unwrap().write_all(stdin.as_bytes()) {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "{e}");
    }
    child.wait_with_output().unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_help() {
    let output = goat().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--template"));
    assert!(stdout.contains("--informat"));
    assert!(stdout.contains("--outformat"));
}

#[test]
fn test_missing_template_is_usage_error() {
    let output = goat().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_list_formats() {
    let output = goat().arg("--list-formats").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let formats: Vec<&str> = stdout.lines().collect();
    assert_eq!(formats, ["csv", "json", "tsv", "xml", "yaml", "yml"]);
}

#[test]
fn test_file_input_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let template = write(
        dir.path(),
        "report.txt",
        "{% for row in document %}{{ row.name }} ({{ row.age }})\n{% endfor %}",
    );
    let input = write(dir.path(), "people.csv", "name,age\nAda,36\nAlan,41\n");

    let output = goat()
        .arg("--template")
        .arg(&template)
        .arg("--in")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Ada (36)\nAlan (41)\n"
    );
}

#[test]
fn test_stdin_requires_informat() {
    let dir = tempfile::tempdir().unwrap();
    let template = write(dir.path(), "t.txt", "{{ a }}");

    let mut cmd = goat();
    cmd.arg("--template").arg(&template);
    let output = run_with_stdin(cmd, r#"{"a": 1}"#);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("goat: "));
    assert!(stderr.contains("--informat"));
}

#[test]
fn test_stdin_with_informat() {
    let dir = tempfile::tempdir().unwrap();
    let template = write(dir.path(), "t.txt", "{{ a }}");

    let mut cmd = goat();
    cmd.arg("--template")
        .arg(&template)
        .arg("--informat")
        .arg("JSON");
    let output = run_with_stdin(cmd, r#"{"a": 1}"#);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(output.stdout, b"1");
}

#[test]
fn test_html_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let template = write(dir.path(), "page.html", "<h1>{{ title }}</h1>\n");
    let input = write(dir.path(), "page.yaml", "title: Tom & Jerry\n");
    let out = dir.path().join("page.out.html");

    let output = goat()
        .arg("--template")
        .arg(&template)
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--outformat")
        .arg("html")
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "<h1>Tom &amp; Jerry</h1>\n"
    );
}

#[test]
fn test_failed_render_does_not_create_output() {
    let dir = tempfile::tempdir().unwrap();
    let template = write(dir.path(), "t.txt", "{{ nope }}");
    let input = write(dir.path(), "data.json", "{}");
    let out = dir.path().join("out.txt");

    let output = goat()
        .arg("--template")
        .arg(&template)
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("template execution error"));
}

#[test]
fn test_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let template = write(dir.path(), "t.txt", "x");
    let input = write(dir.path(), "data.toml", "a = 1");

    let output = goat()
        .arg("--template")
        .arg(&template)
        .arg("--in")
        .arg(&input)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown input format \"toml\""));
}

#[test]
fn test_invalid_outformat() {
    let dir = tempfile::tempdir().unwrap();
    let template = write(dir.path(), "t.txt", "x");
    let input = write(dir.path(), "data.json", "{}");

    let output = goat()
        .arg("--template")
        .arg(&template)
        .arg("--in")
        .arg(&input)
        .arg("--outformat")
        .arg("pdf")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be 'text' or 'html'"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let template = write(dir.path(), "t.txt", "{{ a }}");
    let input = write(dir.path(), "data.json", r#"{"a": "ok"}"#);

    let output = goat()
        .arg("-vv")
        .arg("--template")
        .arg(&template)
        .arg("--in")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(output.stdout, b"ok");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"json\""));
}
