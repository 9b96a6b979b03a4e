// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! probe-core: data model for the probe integration-test harness

pub mod deadline;
pub mod expect;
pub mod invocation;
pub mod outcome;
pub mod time_fmt;

pub use deadline::Deadline;
pub use expect::{Expectation, Lookup};
pub use invocation::{split_command, Invocation};
pub use outcome::{normalize, ExecOutcome, ExecutionResult};
pub use time_fmt::format_elapsed_ms;
