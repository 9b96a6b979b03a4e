// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution adapters

mod local;

pub use local::SubprocessAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessAdapter, ProcessCall};

use async_trait::async_trait;
use probe_core::{Deadline, ExecOutcome, Invocation};

/// Adapter that executes one invocation at a time under a deadline.
///
/// `execute` takes `&mut self`: an adapter owns its timeout guard, so a
/// second invocation cannot be armed while one is in flight.
#[async_trait]
pub trait ProcessAdapter: Send + 'static {
    /// Run the invocation to completion, failure, or deadline expiry.
    async fn execute(&mut self, invocation: &Invocation, deadline: Deadline) -> ExecOutcome;
}
