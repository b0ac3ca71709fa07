// Integration tests for the replay binary
//
// Covers argument parsing, the three replay modes and exit codes.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helper function to get the path to test fixtures
fn fixture_path(filename: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
        .to_string_lossy()
        .to_string()
}

/// Runs the replay binary Cargo built for this test target
fn run_replay(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_replay"))
        .args(args)
        .output()
        .expect("Failed to execute replay binary")
}

#[test]
fn test_replay_help() {
    let output = run_replay(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("USAGE:"));
    assert!(stderr.contains("--validate"));
}

#[test]
fn test_replay_no_arguments_fails() {
    let output = run_replay(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_replay_requires_mode() {
    let output = run_replay(&[&fixture_path("greedy_game.jsonl")]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Must specify"));
}

#[test]
fn test_replay_all_succeeds_on_matching_log() {
    let output = run_replay(&[&fixture_path("greedy_game.jsonl"), "--all"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("REPLAY REPORT"));
    assert!(stdout.contains("Total Turns:    3"));
    assert!(stdout.contains("Mismatches:     0"));
}

#[test]
fn test_replay_all_exits_nonzero_on_mismatch() {
    let output = run_replay(&[&fixture_path("mismatch.jsonl"), "--all"]);
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Turn 0: left → right"));
}

#[test]
fn test_replay_specific_turns() {
    let output = run_replay(&[&fixture_path("greedy_game.jsonl"), "--turns", "1,2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Turns:    2"));
}

#[test]
fn test_replay_invalid_turn_number() {
    let output = run_replay(&[&fixture_path("greedy_game.jsonl"), "--turns", "one"]);
    assert!(!output.status.success());
}

#[test]
fn test_replay_validate() {
    let output = run_replay(&[
        &fixture_path("greedy_game.jsonl"),
        "--validate",
        "0:right,2:up|left",
    ]);
    assert!(output.status.success());

    let output = run_replay(&[&fixture_path("greedy_game.jsonl"), "--validate", "1:down"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation failed"));
}

#[test]
fn test_replay_missing_file() {
    let output = run_replay(&[&fixture_path("does_not_exist.jsonl"), "--all"]);
    assert!(!output.status.success());
}
