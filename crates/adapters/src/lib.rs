// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for running the target executable

pub mod deadline;
pub mod process;
pub mod subprocess;
pub mod traced;

pub use deadline::{run_with_deadline, BlockingError, DeadlineExceeded, TimeoutGuard};
pub use process::{ProcessAdapter, SubprocessAdapter};
pub use traced::TracedProcess;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcessAdapter, ProcessCall};
