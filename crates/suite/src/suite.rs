// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved suite: every case carries a ready-to-run invocation.

use probe_core::{Deadline, Expectation, Invocation};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct Suite {
    /// Directory containing the suite file; relative paths resolve here
    pub dir: PathBuf,
    pub groups: Vec<Group>,
}

impl Suite {
    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|g| g.cases.len()).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub name: String,
    /// Harness working directory while the group runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Case {
    pub name: String,
    pub invocation: Invocation,
    pub expectation: Expectation,
    /// Non-zero exit is the expected outcome
    pub failing: bool,
    pub deadline: Deadline,
}
