//! Executable, variable and environment configuration.

use crate::prelude::*;

const SUITE: &str = r#"
[vars]
greeting = "hello, world"

[[group]]
name = "basic"

[[group.case]]
name = "hello"
command = "hello"
equals = "${greeting}"

[[group.case]]
name = "env"
command = "env"
equals = "${greeting}"
env = { GREETING = "${greeting}" }
"#;

#[test]
fn exe_flag_resolves_against_suite_dir() {
    let project = Project::with_tool();
    project.file("specs/suite.toml", SUITE);
    project.executable("specs/bin/tool", TOOL);
    project
        .probe()
        .args(&["run", "specs/suite.toml", "--exe", "bin/tool"])
        .passes()
        .stdout_has("2 passed, 0 failed");
}

#[test]
fn exe_from_environment() {
    let project = Project::with_tool();
    project.file("suite.toml", SUITE);
    project
        .probe()
        .args(&["run", "suite.toml"])
        .env("PROBE_EXECUTABLE", project.path().join("bin/tool"))
        .passes()
        .stdout_has("2 passed, 0 failed");
}

#[test]
fn missing_executable_is_a_config_error() {
    let project = Project::with_tool();
    project.file("suite.toml", SUITE);
    project
        .probe()
        .args(&["run", "suite.toml"])
        .fails()
        .code(2)
        .stderr_has("no executable configured");
}

#[test]
fn nonexistent_executable_fails_each_case() {
    let project = Project::with_tool();
    project.file("suite.toml", SUITE);
    project
        .probe()
        .args(&["run", "suite.toml", "--exe", "bin/missing"])
        .fails()
        .code(1)
        .stdout_has("0 passed, 2 failed");
}

#[test]
fn json_suite_file() {
    let project = Project::with_tool();
    project.file(
        "suite.json",
        r#"{
  "executable": "bin/tool",
  "group": [
    { "name": "basic", "case": [
      { "name": "version", "command": "--version", "equals": "1.1.0" }
    ] }
  ]
}"#,
    );
    project
        .probe()
        .args(&["run", "suite.json"])
        .passes()
        .stdout_has("PASS  basic / version");
}

#[test]
fn log_file_receives_logs() {
    let project = Project::with_tool();
    project.file(
        "suite.toml",
        "executable = \"bin/tool\"\n[[group]]\nname = \"g\"\n[[group.case]]\nname = \"v\"\ncommand = \"--version\"\nequals = \"1.1.0\"\n",
    );
    project
        .probe()
        .args(&["run", "suite.toml", "--log-file", "logs/probe.log"])
        .env("PROBE_LOG", "debug")
        .passes();
    let log = std::fs::read_to_string(project.path().join("logs/probe.log")).unwrap();
    assert!(log.contains("process.execute"), "log: {}", log);
}
