// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion layer over the process adapter.
//!
//! Each call runs one invocation and crosses its outcome with the
//! `failure_expected` flag:
//!
//! | outcome     | failure_expected = false | failure_expected = true |
//! |-------------|--------------------------|-------------------------|
//! | exit 0      | match stdout             | UnexpectedSuccess       |
//! | exit != 0   | CommandFailed            | match stdout            |
//! | timed out   | DeadlineExceeded         | DeadlineExceeded        |
//! | not started | Spawn                    | Spawn                   |

use crate::error::AssertError;
use probe_adapters::ProcessAdapter;
use probe_core::{Deadline, ExecOutcome, Expectation, Invocation, Lookup};

/// Runs invocations through a process adapter and checks their output.
pub struct Asserter<P> {
    adapter: P,
    deadline: Deadline,
}

impl<P: ProcessAdapter> Asserter<P> {
    pub fn new(adapter: P) -> Self {
        Self {
            adapter,
            deadline: Deadline::default(),
        }
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    /// Deadline applied to subsequent invocations
    pub fn set_deadline(&mut self, deadline: Deadline) {
        self.deadline = deadline;
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// Execute and return the output that assertions compare against.
    ///
    /// With `failure_expected` the output of the failed run is returned and
    /// a zero exit becomes an error. A timeout is an error in both modes.
    pub async fn run(
        &mut self,
        invocation: &Invocation,
        failure_expected: bool,
    ) -> Result<String, AssertError> {
        let command = invocation.command_line();
        tracing::debug!(%command, failure_expected, deadline = %self.deadline, "running");
        match self.adapter.execute(invocation, self.deadline).await {
            ExecOutcome::Succeeded(result) if !failure_expected => Ok(result.stdout),
            ExecOutcome::Succeeded(result) => Err(AssertError::UnexpectedSuccess {
                command,
                stdout: result.stdout,
                stderr: result.stderr,
            }),
            ExecOutcome::Failed(result) if failure_expected => Ok(result.stdout),
            ExecOutcome::Failed(result) => Err(AssertError::CommandFailed {
                command,
                code: result.code_label(),
                stdout: result.stdout,
                stderr: result.stderr,
            }),
            ExecOutcome::TimedOut { secs } => Err(AssertError::DeadlineExceeded { command, secs }),
            ExecOutcome::SpawnFailed { message } => Err(AssertError::Spawn { command, message }),
        }
    }

    /// Normalized output must equal `expected` exactly.
    pub async fn output_equals(
        &mut self,
        invocation: &Invocation,
        expected: &str,
        failure_expected: bool,
    ) -> Result<(), AssertError> {
        let actual = self.run(invocation, failure_expected).await?;
        if actual == expected {
            Ok(())
        } else {
            Err(AssertError::Mismatch {
                command: invocation.command_line(),
                expected: expected.to_string(),
                actual,
            })
        }
    }

    /// Normalized output must contain every entry of `lookup`.
    ///
    /// An empty lookup is rejected before anything is spawned.
    pub async fn output_contains(
        &mut self,
        invocation: &Invocation,
        lookup: impl Into<Lookup>,
        failure_expected: bool,
    ) -> Result<(), AssertError> {
        let lookup = lookup.into();
        if lookup.is_empty() {
            return Err(AssertError::InvalidArguments("empty lookup".to_string()));
        }
        let output = self.run(invocation, failure_expected).await?;
        match lookup.first_missing(&output) {
            None => Ok(()),
            Some(needle) => Err(AssertError::MissingSubstring {
                command: invocation.command_line(),
                needle: needle.to_string(),
                output,
            }),
        }
    }

    /// Dispatch on an [`Expectation`]
    pub async fn check(
        &mut self,
        invocation: &Invocation,
        expectation: &Expectation,
        failure_expected: bool,
    ) -> Result<(), AssertError> {
        match expectation {
            Expectation::Equals(expected) => {
                self.output_equals(invocation, expected, failure_expected)
                    .await
            }
            Expectation::Contains(lookup) => {
                self.output_contains(invocation, lookup.clone(), failure_expected)
                    .await
            }
        }
    }
}

#[cfg(test)]
#[path = "asserter_tests.rs"]
mod tests;
