#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn topwords(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_topwords"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute topwords");

    let mut pipe = child.stdin.take().unwrap();
    pipe.write_all(stdin.unwrap_or("").as_bytes()).unwrap();
    drop(pipe);

    child.wait_with_output().unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("Invalid UTF-8 output")
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_text_argument() {
    let output = topwords(&["-k", "2", "--text", "a a a b b c"], None);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["a", "b"]);
}

#[test]
fn test_reads_stdin_with_counts() {
    let output = topwords(&["-k", "1", "--counts"], Some("Go go GO stop"));
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["go\t3"]);
}

#[test]
fn test_json_output() {
    let output = topwords(&["-k", "3", "--json", "-w", "-t", "x  y x"], None);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Failed to parse JSON output");
    assert_eq!(
        json,
        serde_json::json!([{"word": "x", "count": 2}, {"word": "y", "count": 1}])
    );
}

#[test]
fn test_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "one two two").unwrap();

    let path = file.path().to_str().unwrap();
    let output = topwords(&["-k", "5", path], None);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["two", "one"]);
}

#[test]
fn test_non_positive_k_prints_nothing() {
    for k in ["0", "-4"] {
        let output = topwords(&["-k", k, "-t", "a b c"], None);
        assert!(output.status.success(), "k = {k}");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_missing_file_fails() {
    let output = topwords(&["no/such/file.txt"], None);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no/such/file.txt"));
}
