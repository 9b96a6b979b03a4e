// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! probe execution engine: assertions over subprocess output

mod asserter;
mod error;
mod report;
mod runner;
mod workdir;

pub use asserter::Asserter;
pub use error::AssertError;
pub use report::{CaseReport, CaseStatus, SuiteReport};
pub use runner::{CaseFilter, SuiteRunner};
pub use workdir::WorkdirGuard;
