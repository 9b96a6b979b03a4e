// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timeout guard: race an operation against a wall-clock deadline.
//!
//! The operation and the timer are raced with `tokio::time::timeout`. When
//! the timer wins, the operation's future is dropped (for a subprocess this
//! kills the child if it was spawned with `kill_on_drop`). Blocking closures
//! run on the blocking pool and are detached on expiry; the thread finishes
//! on its own.
//!
//! A guard is armed through `&mut self`, so one guard can never hold two
//! deadlines at once. Nested deadlines are not supported.

use probe_core::Deadline;
use std::future::Future;
use thiserror::Error;

/// The deadline elapsed before the operation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("timeout of {secs}s. exhausted")]
pub struct DeadlineExceeded {
    pub secs: u64,
}

/// Failure of [`TimeoutGuard::run_blocking`]
#[derive(Debug, Error)]
pub enum BlockingError {
    #[error(transparent)]
    Deadline(#[from] DeadlineExceeded),
    #[error("blocking operation did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Holds at most one armed deadline.
#[derive(Debug, Default)]
pub struct TimeoutGuard {
    armed: Option<Deadline>,
}

impl TimeoutGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a deadline is currently armed.
    ///
    /// Always false once `run` has returned or its future was dropped.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Run `operation` under `deadline`.
    pub async fn run<F>(&mut self, deadline: Deadline, operation: F) -> Result<F::Output, DeadlineExceeded>
    where
        F: Future,
    {
        let _armed = Armed::arm(&mut self.armed, deadline);
        match tokio::time::timeout(deadline.as_duration(), operation).await {
            Ok(value) => Ok(value),
            Err(_elapsed) => {
                tracing::warn!(secs = deadline.secs(), "deadline exceeded");
                Err(DeadlineExceeded {
                    secs: deadline.secs(),
                })
            }
        }
    }

    /// Run a blocking closure on the blocking pool under `deadline`.
    ///
    /// On expiry the closure's thread is detached, not stopped.
    pub async fn run_blocking<F, T>(&mut self, deadline: Deadline, operation: F) -> Result<T, BlockingError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let handle = tokio::task::spawn_blocking(operation);
        let joined = self.run(deadline, handle).await?;
        Ok(joined?)
    }
}

/// Arms the slot on creation and clears it on drop, on every exit path.
struct Armed<'a> {
    slot: &'a mut Option<Deadline>,
}

impl<'a> Armed<'a> {
    fn arm(slot: &'a mut Option<Deadline>, deadline: Deadline) -> Self {
        debug_assert!(slot.is_none(), "timeout guard armed twice");
        *slot = Some(deadline);
        tracing::trace!(secs = deadline.secs(), "deadline armed");
        Self { slot }
    }
}

impl Drop for Armed<'_> {
    fn drop(&mut self) {
        if let Some(deadline) = self.slot.take() {
            tracing::trace!(secs = deadline.secs(), "deadline disarmed");
        }
    }
}

/// Run `operation` under a fresh single-use guard.
pub async fn run_with_deadline<F>(deadline: Deadline, operation: F) -> Result<F::Output, DeadlineExceeded>
where
    F: Future,
{
    TimeoutGuard::new().run(deadline, operation).await
}

#[cfg(test)]
#[path = "deadline_tests.rs"]
mod tests;
