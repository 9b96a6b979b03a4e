//! `probe list` shows cases without running them.

use crate::prelude::*;

const SUITE: &str = r#"
executable = "bin/tool"

[[group]]
name = "basic"

[[group.case]]
name = "version"
command = "--version"
equals = "1.1.0"

[[group.case]]
name = "syntax error"
command = "syntax"
contains = "SyntaxError: Parse error"
failing = true

[[group]]
name = "slow"

[[group.case]]
name = "hang"
command = "hang"
equals = ""
timeout = 1
"#;

#[test]
fn list_text() {
    let project = Project::empty();
    project.file("suite.toml", SUITE);
    project
        .probe()
        .args(&["list", "suite.toml"])
        .passes()
        .stdout_eq(
            "\
basic
  version
  syntax error (failing)
slow
  hang [1s]
",
        );
}

#[test]
fn list_json() {
    let project = Project::empty();
    project.file("suite.toml", SUITE);
    let run = project.probe().args(&["list", "suite.toml", "-o", "json"]).passes();
    let json = run.json();
    assert_eq!(json[0]["name"], "basic");
    assert_eq!(json[0]["cases"][1]["failing"], true);
    assert_eq!(json[1]["cases"][0]["timeout"], 1);
}

#[test]
fn list_does_not_need_an_executable() {
    let project = Project::empty();
    project.file(
        "suite.toml",
        "[[group]]\nname = \"g\"\n[[group.case]]\nname = \"c\"\ncommand = \"x\"\nequals = \"y\"\n",
    );
    project
        .probe()
        .args(&["list", "suite.toml"])
        .passes()
        .stdout_eq("g\n  c\n");
}
