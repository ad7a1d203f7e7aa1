//! Tests for the `rill` binary

use std::path::PathBuf;
use std::process::{Command, Output};

fn rill(args: &[&str]) -> Output {
    Command::new(PathBuf::from(env!("CARGO_BIN_EXE_rill")))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run rill")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_eval_prints_trace() {
    let output = rill(&["--no-color", "-e", "let x = 1.5;"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1: let -> LET\n1: x -> IDENTIFIER\n1: = -> EQUAL\n1: 1.5 -> NUMBER\n1: ; -> SEMICOLON\n1:  -> EOF\n"
    );
}

#[test]
fn test_default_runs_sample_program() {
    let output = rill(&["--no-color"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("1: let -> LET\n"));
    assert!(text.ends_with("10:  -> EOF\n"));
}

#[test]
fn test_errors_are_tokens_by_default() {
    let output = rill(&["--no-color", "-e", "a & b"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("1: Unexpected character. -> ERROR\n"));
}

#[test]
fn test_deny_errors_fails() {
    let output = rill(&["--no-color", "--deny-errors", "-e", "\"open"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Unterminated string. -> ERROR"));
}

#[test]
fn test_diagnostics_go_to_stderr() {
    let output = rill(&["--no-color", "--diagnostics", "-e", "let y = @;"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Lex Error: Unexpected character."));
    assert!(stderr.contains("--> 1:9"));
}

#[test]
fn test_missing_file_is_reported() {
    let output = rill(&["--no-color", "does/not/exist.rill"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read file"));
}

#[test]
fn test_verbose_logs_lexical_errors() {
    let output = rill(&["--no-color", "-v", "-e", "@"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1: Unexpected character."), "stderr: {stderr}");
}

#[test]
fn test_quiet_by_default() {
    let output = rill(&["--no-color", "-e", "@"]);
    assert!(String::from_utf8_lossy(&output.stderr).is_empty());
}
