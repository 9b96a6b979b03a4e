//! Every case runs under a deadline; a hung tool fails instead of blocking.

use crate::prelude::*;
use std::time::{Duration, Instant};

const SUITE: &str = r#"
executable = "bin/tool"

[[group]]
name = "slow"

[[group.case]]
name = "hang"
command = "hang"
equals = ""
timeout = 1

[[group.case]]
name = "after"
command = "--version"
equals = "1.1.0"
"#;

#[test]
fn hung_case_times_out_and_suite_continues() {
    let project = Project::with_tool();
    project.file("suite.toml", SUITE);
    let start = Instant::now();
    project
        .probe()
        .args(&["run", "suite.toml"])
        .fails()
        .code(1)
        .stdout_has("TIME  slow / hang")
        .stdout_has("timeout of 1s. exhausted")
        .stdout_has("PASS  slow / after")
        .stdout_has("1 passed, 1 failed (1 timed out)");
    assert!(start.elapsed() < Duration::from_secs(15));
}

#[test]
fn expected_failure_does_not_excuse_a_timeout() {
    let project = Project::with_tool();
    project.file(
        "suite.toml",
        r#"
executable = "bin/tool"

[[group]]
name = "slow"

[[group.case]]
name = "hang"
command = "hang"
contains = "anything"
failing = true
timeout = 1
"#,
    );
    project
        .probe()
        .args(&["run", "suite.toml"])
        .fails()
        .code(1)
        .stdout_has("TIME  slow / hang");
}

#[test]
fn timeout_flag_sets_default_deadline() {
    let project = Project::with_tool();
    project.file(
        "suite.toml",
        r#"
executable = "bin/tool"
timeout = 60

[[group]]
name = "slow"

[[group.case]]
name = "hang"
command = "hang"
equals = ""
"#,
    );
    project
        .probe()
        .args(&["run", "suite.toml", "--timeout", "1"])
        .fails()
        .stdout_has("timeout of 1s. exhausted");
}

#[test]
fn json_status_is_timed_out() {
    let project = Project::with_tool();
    project.file("suite.toml", SUITE);
    let run = project
        .probe()
        .args(&["run", "suite.toml", "-o", "json"])
        .fails();
    let json = run.json();
    assert_eq!(json["cases"][0]["status"], "timed_out");
    assert_eq!(json["cases"][1]["status"], "passed");
}
