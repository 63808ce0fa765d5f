//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "studywell-cli", "--"])
        .args(args)
        .output()
        .expect("failed to execute CLI command");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Run a CLI command with piped stdin.
fn run_cli_with_input(args: &[&str], input: &str) -> (String, String, i32) {
    let mut child = Command::new("cargo")
        .args(["run", "-p", "studywell-cli", "--"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn CLI command");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait for CLI");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

#[test]
fn help_prints_usage() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Studywell CLI"));
    assert!(stdout.contains("profile"));
}

#[test]
fn config_list_is_valid_json() {
    let (stdout, stderr, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(parsed["api"]["subjects_url"].is_string());
}

#[test]
fn profile_preview_computes_reference_targets() {
    let (stdout, stderr, code) = run_cli(&[
        "profile",
        "preview",
        "--age",
        "20",
        "--weight",
        "65",
        "--height",
        "170",
        "--gender",
        "Female",
        "--activity",
        "Moderately Active",
    ]);
    assert_eq!(code, 0, "preview failed: {stderr}");
    let metrics: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(metrics["basal_metabolic_rate"], 1451.5);
    assert_eq!(metrics["calorie_target"], 2250);
    assert_eq!(metrics["water_target_ml"], 2275);
}

#[test]
fn profile_preview_degrades_to_defaults() {
    let (stdout, _, code) = run_cli(&["profile", "preview"]);
    assert_eq!(code, 0);
    let metrics: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(metrics["calorie_target"], 2400);
    assert_eq!(metrics["water_target_ml"], 2500);
}

#[test]
fn wizard_full_run_reaches_review() {
    // age, gender=Female, weight, height, activity=Moderately Active,
    // goal, restrictions skipped, study habits.
    let input = "20\n2\n65\n170\n3\n1\n\n2\n";
    let (stdout, stderr, code) = run_cli_with_input(&["profile", "setup"], input);
    assert_eq!(code, 0, "wizard failed: {stderr}");
    assert!(stdout.contains("\"calorie_target\": 2250"));
    assert!(stdout.contains("\"water_target_ml\": 2275"));
}

#[test]
fn wizard_rejects_invalid_answer_and_recovers() {
    // First age answer is out of range; the wizard stays on the step.
    let input = "150\n20\n2\n65\n170\n3\n1\n\n2\n";
    let (stdout, _, code) = run_cli_with_input(&["profile", "setup"], input);
    assert_eq!(code, 0);
    assert!(stdout.contains("Please enter a valid age"));
    assert!(stdout.contains("\"calorie_target\": 2250"));
}
