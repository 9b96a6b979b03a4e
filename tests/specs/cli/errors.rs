//! Configuration and usage errors exit with code 2.

use crate::prelude::*;

#[test]
fn unknown_subcommand_is_usage_error() {
    cli().args(&["frobnicate"]).fails().code(2);
}

#[test]
fn missing_suite_file() {
    let project = Project::empty();
    project
        .probe()
        .args(&["run", "missing.toml"])
        .fails()
        .code(2)
        .stderr_has("Error: failed to read missing.toml");
}

#[test]
fn case_without_matcher_names_the_case() {
    let project = Project::with_tool();
    project.file(
        "suite.toml",
        r#"
executable = "bin/tool"

[[group]]
name = "basic"

[[group.case]]
name = "version"
command = "--version"
"#,
    );
    project
        .probe()
        .args(&["run", "suite.toml"])
        .fails()
        .code(2)
        .stderr_has("invalid format for basic/version")
        .stderr_has("one of `equals` or `contains` is required");
}

#[test]
fn empty_contains_is_rejected_at_load() {
    let project = Project::with_tool();
    project.file(
        "suite.toml",
        r#"
executable = "bin/tool"

[[group]]
name = "basic"

[[group.case]]
name = "nothing"
command = "hello"
contains = []
"#,
    );
    project
        .probe()
        .args(&["run", "suite.toml"])
        .fails()
        .code(2)
        .stderr_has("invalid format for basic/nothing")
        .stderr_has("`contains` must not be empty");
}

#[test]
fn duplicate_case_names_are_rejected() {
    let project = Project::with_tool();
    project.file(
        "suite.toml",
        r#"
executable = "bin/tool"

[[group]]
name = "basic"

[[group.case]]
name = "version"
command = "--version"
equals = "1.1.0"

[[group.case]]
name = "version"
command = "--version"
equals = "1.1.0"
"#,
    );
    project
        .probe()
        .args(&["run", "suite.toml"])
        .fails()
        .code(2)
        .stderr_has("duplicate case name");
}

#[test]
fn zero_timeout_is_rejected() {
    let project = Project::with_tool();
    project.file(
        "suite.toml",
        "executable = \"bin/tool\"\n[[group]]\nname = \"g\"\n",
    );
    project
        .probe()
        .args(&["run", "suite.toml", "--timeout", "0"])
        .fails()
        .code(2)
        .stderr_has("timeout must be at least 1 second");
}

#[test]
fn unparsable_env_timeout_is_rejected() {
    let project = Project::with_tool();
    project.file(
        "suite.toml",
        "executable = \"bin/tool\"\n[[group]]\nname = \"g\"\n",
    );
    project
        .probe()
        .args(&["run", "suite.toml"])
        .env("PROBE_TIMEOUT_SECS", "soon")
        .fails()
        .code(2)
        .stderr_has("invalid PROBE_TIMEOUT_SECS");
}

#[test]
fn missing_version_file_is_a_config_error() {
    let project = Project::empty();
    project.file(
        "suite.toml",
        "executable = \"sh\"\nversion_from = \"package.json\"\n",
    );
    project
        .probe()
        .args(&["run", "suite.toml"])
        .fails()
        .code(2)
        .stderr_has("version lookup failed");
}
