//! Help and version output.

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    cli()
        .passes()
        .stdout_has("Usage: probe")
        .stdout_has("run")
        .stdout_has("list")
        .stdout_has("check");
}

#[test]
fn version_prints_package_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_eq(&format!("probe {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_help_lists_overrides() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--exe")
        .stdout_has("--timeout")
        .stdout_has("--filter")
        .stdout_has("--group");
}
