// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured process output and the tagged execution outcome.

use serde::{Deserialize, Serialize};

/// Output captured from one finished invocation.
///
/// `stdout` and `stderr` are already normalized (see [`normalize`]).
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn new(code: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Build from raw process bytes, normalizing both streams
    pub fn from_raw(code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            code,
            stdout: normalize(stdout),
            stderr: normalize(stderr),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code for messages: the number, or `signal` when there is none
    pub fn code_label(&self) -> String {
        match self.code {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        }
    }
}

/// How an invocation ended.
///
/// The assertion layer matches on this tag instead of treating a non-zero
/// exit as an exceptional path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecOutcome {
    /// Exit code zero
    Succeeded(ExecutionResult),
    /// Non-zero exit or killed by a signal; output is kept for inspection
    Failed(ExecutionResult),
    /// The deadline elapsed before the process finished
    TimedOut { secs: u64 },
    /// The executable could not be started
    SpawnFailed { message: String },
}

impl ExecOutcome {
    /// Classify a finished process by its exit code
    pub fn from_result(result: ExecutionResult) -> Self {
        if result.success() {
            ExecOutcome::Succeeded(result)
        } else {
            ExecOutcome::Failed(result)
        }
    }

    pub fn result(&self) -> Option<&ExecutionResult> {
        match self {
            ExecOutcome::Succeeded(r) | ExecOutcome::Failed(r) => Some(r),
            ExecOutcome::TimedOut { .. } | ExecOutcome::SpawnFailed { .. } => None,
        }
    }

    /// Short label for logs: `succeeded`, `failed`, `timed_out`, `spawn_failed`
    pub fn label(&self) -> &'static str {
        match self {
            ExecOutcome::Succeeded(_) => "succeeded",
            ExecOutcome::Failed(_) => "failed",
            ExecOutcome::TimedOut { .. } => "timed_out",
            ExecOutcome::SpawnFailed { .. } => "spawn_failed",
        }
    }
}

/// Decode process output as UTF-8 (lossy) and trim surrounding whitespace.
pub fn normalize(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_string()
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
