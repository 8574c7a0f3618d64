//! E2E tests for complete CLI workflows
//! Tests the entire application through the command-line interface

use std::process::Command;

const CLI_BINARY: &str = "target/debug/numcast-cli";

fn run_command(args: &[&str]) -> std::process::Output {
    Command::new(CLI_BINARY)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {}", CLI_BINARY))
}

fn run_tokens(tokens: &str) -> std::process::Output {
    run_command(&["-c", tokens])
}

#[test]
fn test_basic_conversion() {
    let output = run_tokens("1 2 3");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1\n2\n3");
}

#[test]
fn test_comma_separated_tokens() {
    let output = run_tokens("-5, 0, 42");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-5\n0\n42");
}

#[test]
fn test_json_output() {
    let output = run_command(&["-c", "1 2 3", "--json"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[1,2,3]");
}

#[test]
fn test_json_output_empty() {
    let output = run_command(&["-c", "", "--json"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn test_boundary_values() {
    let output = run_tokens("9223372036854775807 -9223372036854775808");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("9223372036854775807"));
    assert!(stdout.contains("-9223372036854775808"));
}

#[test]
fn test_malformed_token_error() {
    let output = run_tokens("1 oops 3");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INPUT"));
}

#[test]
fn test_out_of_range_error() {
    let output = run_tokens("9223372036854775808");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("9223372036854775808"));
    assert!(stderr.contains("ERR_RANGE"));
}

#[test]
fn test_exit_code_success() {
    let output = run_tokens("0");
    assert!(output.status.success());
}

#[test]
fn test_exit_code_failure() {
    let output = run_tokens("not-a-number");
    assert!(!output.status.success());
}
