// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real subprocess adapter.

use super::ProcessAdapter;
use crate::deadline::TimeoutGuard;
use crate::subprocess::{self, SubprocessError};
use async_trait::async_trait;
use probe_core::{Deadline, ExecOutcome, ExecutionResult, Invocation};

/// Spawns the target executable with tokio and waits under a deadline.
#[derive(Debug, Default)]
pub struct SubprocessAdapter {
    guard: TimeoutGuard,
}

impl SubprocessAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProcessAdapter for SubprocessAdapter {
    async fn execute(&mut self, invocation: &Invocation, deadline: Deadline) -> ExecOutcome {
        let cmd = subprocess::command_for(invocation);
        let description = invocation.program.display().to_string();
        match subprocess::run_with_deadline(&mut self.guard, cmd, deadline, &description).await {
            Ok(output) => ExecOutcome::from_result(ExecutionResult::from_raw(
                output.status.code(),
                &output.stdout,
                &output.stderr,
            )),
            Err(SubprocessError::Deadline { source, .. }) => {
                ExecOutcome::TimedOut { secs: source.secs }
            }
            Err(e @ SubprocessError::Io { .. }) => ExecOutcome::SpawnFailed {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
