//! `probe check` runs one assertion against an arbitrary command.

use crate::prelude::*;

#[test]
fn equals_passes() {
    cli()
        .args(&["check", "--equals", "hello, world", "--", "sh", "-c", "echo 'hello, world'"])
        .passes()
        .stdout_has("PASS  check / sh -c echo 'hello, world'");
}

#[test]
fn expected_failure_with_contains() {
    cli()
        .args(&[
            "check",
            "--failing",
            "--contains",
            "SyntaxError",
            "--contains",
            "Parse error",
            "--",
            "sh",
            "-c",
            "echo 'SyntaxError: Parse error'; exit 1",
        ])
        .passes();
}

#[test]
fn mismatch_exits_one() {
    cli()
        .args(&["check", "--equals", "b", "--", "echo", "a"])
        .fails()
        .code(1)
        .stdout_has("FAIL")
        .stdout_has("does not match");
}

#[test]
fn hang_times_out() {
    cli()
        .args(&["check", "--timeout", "1", "--equals", "", "--", "sleep", "30"])
        .fails()
        .code(1)
        .stdout_has("TIME")
        .stdout_has("sleep 30: timeout of 1s. exhausted");
}

#[test]
fn split_accepts_legacy_command_string() {
    cli()
        .args(&["check", "--split", "--equals", "a b", "--", "echo a b"])
        .passes();
}

#[test]
fn json_report() {
    let run = cli()
        .args(&["check", "-o", "json", "--equals", "a", "--", "echo", "a"])
        .passes();
    let json = run.json();
    assert_eq!(json["status"], "passed");
    assert_eq!(json["group"], "check");
}
