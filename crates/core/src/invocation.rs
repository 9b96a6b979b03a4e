// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One configured execution of the target executable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Executable, argument vector, working directory and environment overrides
/// for a single test call.
///
/// Arguments are always passed as a vector and never through a shell. When
/// `cwd` is `None` the child inherits the harness's current directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append arguments in order
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append the arguments of a space-joined command string.
    ///
    /// See [`split_command`] for the exact splitting rules.
    pub fn command_str(self, command: &str) -> Self {
        self.args(split_command(command))
    }

    /// Run the child in `dir` instead of the inherited working directory
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Set an environment variable for the child
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Human-readable command line, for diagnostics only
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Split a space-joined command string into an argument vector.
///
/// Splits on every single ASCII space and nothing else: there is no quoting
/// or escaping, tabs are kept inside arguments, and consecutive spaces yield
/// empty arguments. An empty input yields one empty argument.
pub fn split_command(command: &str) -> Vec<String> {
    command.split(' ').map(str::to_string).collect()
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
