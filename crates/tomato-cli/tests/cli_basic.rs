//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "tomato-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn shifts_lists_default_sequence() {
    let (stdout, _, code) = run_cli(&["shifts"]);
    assert_eq!(code, 0, "shifts failed");
    assert!(stdout.contains("Work"));
    assert!(stdout.contains("LongBreak"));
}

#[test]
fn shifts_json_places_long_break_every_eighth() {
    let (stdout, _, code) = run_cli(&["shifts", "--json", "--count", "8"]);
    assert_eq!(code, 0, "shifts --json failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let sequence = parsed.as_array().expect("JSON array");
    assert_eq!(sequence.len(), 8);
    assert_eq!(sequence[0]["shift"], "work");
    assert_eq!(sequence[1]["shift"], "break");
    assert_eq!(sequence[7]["shift"], "long_break");
    // The label never distinguishes long breaks.
    assert_eq!(sequence[7]["label"], "BREAK");
}

#[test]
fn zero_work_duration_is_rejected() {
    let (_, stderr, code) = run_cli(&["shifts", "--work", "0"]);
    assert_ne!(code, 0, "zero work duration must fail");
    assert!(stderr.contains("error"));
}

#[test]
fn non_numeric_duration_is_rejected() {
    let (_, stderr, code) = run_cli(&["run", "--work", "twenty"]);
    assert_ne!(code, 0, "non-numeric duration must fail");
    assert!(stderr.contains("whole number"));
}
