// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion failures

use similar::{ChangeTag, TextDiff};
use thiserror::Error;

/// Why a single assertion did not pass.
///
/// Every variant terminates only the current case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertError {
    #[error("{command}: timeout of {secs}s. exhausted")]
    DeadlineExceeded { command: String, secs: u64 },

    #[error("command {command} exited: {code}\n{}", streams(stdout, stderr))]
    CommandFailed {
        command: String,
        code: String,
        stdout: String,
        stderr: String,
    },

    #[error("command {command} has not failed\n{}", streams(stdout, stderr))]
    UnexpectedSuccess {
        command: String,
        stdout: String,
        stderr: String,
    },

    #[error("output of {command} does not match\n{}", diff(expected, actual))]
    Mismatch {
        command: String,
        expected: String,
        actual: String,
    },

    #[error("output of {command} does not contain '{needle}'\noutput: {output}")]
    MissingSubstring {
        command: String,
        needle: String,
        output: String,
    },

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("could not start {command}: {message}")]
    Spawn { command: String, message: String },
}

impl AssertError {
    /// True when the failure is a hang rather than wrong output
    pub fn is_timeout(&self) -> bool {
        matches!(self, AssertError::DeadlineExceeded { .. })
    }
}

fn streams(stdout: &str, stderr: &str) -> String {
    let mut out = format!("stdout: {}", stdout);
    if !stderr.is_empty() {
        out.push_str(&format!("\nstderr: {}", stderr));
    }
    out
}

/// Line diff with `-` for expected and `+` for actual.
///
/// When the two sides differ only in whitespace, both are appended quoted.
fn diff(expected: &str, actual: &str) -> String {
    let mut out = String::from("--- expected\n+++ actual");
    for change in TextDiff::from_lines(expected, actual).iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        let line = change.value();
        out.push('\n');
        out.push(sign);
        out.push_str(line.strip_suffix('\n').unwrap_or(line));
    }
    if expected.split_whitespace().eq(actual.split_whitespace()) {
        out.push_str(&format!("\nexpected: {:?}\nactual: {:?}", expected, actual));
    }
    out
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
