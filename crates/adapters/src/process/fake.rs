// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake process adapter for testing

use super::ProcessAdapter;
use async_trait::async_trait;
use parking_lot::Mutex;
use probe_core::{Deadline, ExecOutcome, ExecutionResult, Invocation};
use std::collections::VecDeque;
use std::sync::Arc;

/// Recorded execute call
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessCall {
    pub invocation: Invocation,
    pub deadline: Deadline,
    /// Working directory of the harness process when the call was made
    pub harness_cwd: Option<std::path::PathBuf>,
}

#[derive(Default)]
struct FakeProcessState {
    outcomes: VecDeque<ExecOutcome>,
    calls: Vec<ProcessCall>,
}

/// Fake process adapter that replays scripted outcomes.
///
/// Clones share state, so a test can keep one handle for inspection while
/// the engine owns another. With nothing scripted, every call succeeds with
/// empty output.
#[derive(Clone, Default)]
pub struct FakeProcessAdapter {
    inner: Arc<Mutex<FakeProcessState>>,
}

impl FakeProcessAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome for the next call
    pub fn push_outcome(&self, outcome: ExecOutcome) -> &Self {
        self.inner.lock().outcomes.push_back(outcome);
        self
    }

    /// Queue a zero-exit outcome with the given stdout
    pub fn push_success(&self, stdout: &str) -> &Self {
        self.push_outcome(ExecOutcome::Succeeded(ExecutionResult::new(Some(0), stdout, "")))
    }

    /// Queue a non-zero exit outcome with the given stdout
    pub fn push_failure(&self, code: i32, stdout: &str) -> &Self {
        self.push_outcome(ExecOutcome::Failed(ExecutionResult::new(Some(code), stdout, "")))
    }

    /// Queue a deadline expiry
    pub fn push_timeout(&self, secs: u64) -> &Self {
        self.push_outcome(ExecOutcome::TimedOut { secs })
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProcessCall> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl ProcessAdapter for FakeProcessAdapter {
    async fn execute(&mut self, invocation: &Invocation, deadline: Deadline) -> ExecOutcome {
        let mut state = self.inner.lock();
        state.calls.push(ProcessCall {
            invocation: invocation.clone(),
            deadline,
            harness_cwd: std::env::current_dir().ok(),
        });
        state
            .outcomes
            .pop_front()
            .unwrap_or_else(|| ExecOutcome::Succeeded(ExecutionResult::new(Some(0), "", "")))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
