//! End-to-end tests through the real binary: stdout carries program
//! output only, diagnostics land on stderr, and exit codes match the
//! failure class.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn monty() -> Command {
    Command::new(env!("CARGO_BIN_EXE_monty"))
}

fn run_script(source: &str) -> std::process::Output {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("script.m");
    fs::write(&path, source).expect("failed to write script");

    monty()
        .arg(&path)
        .output()
        .expect("failed to execute interpreter")
}

#[test]
fn program_output_goes_to_stdout_only() {
    let output = run_script("push 1\npush 2\npall\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\n1\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn fatal_diagnostics_go_to_stderr_with_line_numbers() {
    let output = run_script("push 1\n\n\nswap\n");

    assert_eq!(output.status.code(), Some(65));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "L4: can't swap, stack too short\n"
    );
}

#[test]
fn output_before_the_fatal_line_is_flushed() {
    let output = run_script("push 7\npint\ndiv\n");

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "7\n");
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "L3: can't div, stack too short\n"
    );
}

#[test]
fn unknown_instruction_halts_with_its_name() {
    let output = run_script("nop\nfoo 1\n");

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "L2: unknown instruction foo\n"
    );
}

#[test]
fn push_without_an_integer_is_fatal() {
    let output = run_script("push abc\n");

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "L1: usage: push integer\n"
    );
}

#[test]
fn division_overflow_is_a_diagnostic_not_a_panic() {
    let output = run_script("push -9223372036854775808\npush -1\ndiv\n");

    assert_eq!(output.status.code(), Some(65));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "L3: division overflow\n"
    );
}

#[test]
fn division_by_zero_names_the_right_line() {
    let output = run_script("push 5\npush 0\ndiv\n");

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "L3: division by zero\n"
    );
}

#[test]
fn pchar_out_of_range_is_fatal() {
    let output = run_script("push 300\npchar\n");

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "L2: can't pchar, value out of range\n"
    );
}

#[test]
fn usage_error_for_extra_arguments() {
    let output = monty()
        .args(["one.m", "two.m"])
        .output()
        .expect("failed to execute interpreter");

    assert_eq!(output.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE: monty file"));
}

#[test]
fn missing_file_reports_open_error() {
    let output = monty()
        .arg("no_such_script.m")
        .output()
        .expect("failed to execute interpreter");

    assert_eq!(output.status.code(), Some(74));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: Can't open file no_such_script.m\n"
    );
}

#[test]
fn piped_stdin_is_interpreted_as_a_stream() {
    let mut child = monty()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn interpreter");

    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(b"push 42\npint\n")
        .expect("failed to write to stdin");

    let output = child.wait_with_output().expect("failed to wait");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "42\n");
}

#[test]
fn piped_stdin_failures_use_stream_line_numbers() {
    let mut child = monty()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn interpreter");

    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(b"push 1\npint\npop\npop\n")
        .expect("failed to write to stdin");

    let output = child.wait_with_output().expect("failed to wait");

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "L4: can't pop an empty stack\n"
    );
}
