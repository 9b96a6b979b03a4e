// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::process::ProcessAdapter;
use async_trait::async_trait;
use probe_core::{Deadline, ExecOutcome, Invocation};
use tracing::Instrument;

/// Wrapper that adds tracing to any ProcessAdapter
#[derive(Clone, Debug, Default)]
pub struct TracedProcess<P> {
    inner: P,
}

impl<P> TracedProcess<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: ProcessAdapter> ProcessAdapter for TracedProcess<P> {
    async fn execute(&mut self, invocation: &Invocation, deadline: Deadline) -> ExecOutcome {
        let span = tracing::info_span!(
            "process.execute",
            program = %invocation.program.display(),
            deadline_secs = deadline.secs(),
        );
        let inner = &mut self.inner;
        async move {
            tracing::debug!(args = ?invocation.args, env_count = invocation.env.len(), "starting");
            let start = std::time::Instant::now();
            let outcome = inner.execute(invocation, deadline).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &outcome {
                ExecOutcome::Succeeded(r) => {
                    tracing::info!(elapsed_ms, stdout_len = r.stdout.len(), "exited 0")
                }
                ExecOutcome::Failed(r) => {
                    tracing::info!(elapsed_ms, code = %r.code_label(), "exited non-zero")
                }
                ExecOutcome::TimedOut { secs } => {
                    tracing::error!(elapsed_ms, secs, "deadline exceeded")
                }
                ExecOutcome::SpawnFailed { message } => {
                    tracing::error!(elapsed_ms, error = %message, "spawn failed")
                }
            }
            outcome
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
