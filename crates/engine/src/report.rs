// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-case and per-suite results.

use crate::error::AssertError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Passed,
    Failed,
    TimedOut,
}

impl CaseStatus {
    /// Four-letter label for text output
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Passed => "PASS",
            CaseStatus::Failed => "FAIL",
            CaseStatus::TimedOut => "TIME",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub group: String,
    pub name: String,
    pub status: CaseStatus,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CaseReport {
    pub fn new(group: &str, name: &str, result: Result<(), AssertError>, elapsed_ms: u64) -> Self {
        let (status, message) = match result {
            Ok(()) => (CaseStatus::Passed, None),
            Err(e) if e.is_timeout() => (CaseStatus::TimedOut, Some(e.to_string())),
            Err(e) => (CaseStatus::Failed, Some(e.to_string())),
        };
        Self {
            group: group.to_string(),
            name: name.to_string(),
            status,
            elapsed_ms,
            message,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Passed
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.count(CaseStatus::Passed)
    }

    /// Failed cases, timeouts included
    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn timed_out(&self) -> usize {
        self.count(CaseStatus::TimedOut)
    }

    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(CaseReport::passed)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.cases.iter().map(|c| c.elapsed_ms).sum()
    }

    /// `"4 passed, 1 failed"`, with timeouts called out when present
    pub fn summary(&self) -> String {
        let mut summary = format!("{} passed, {} failed", self.passed(), self.failed());
        let timed_out = self.timed_out();
        if timed_out > 0 {
            summary.push_str(&format!(" ({} timed out)", timed_out));
        }
        summary
    }

    fn count(&self, status: CaseStatus) -> usize {
        self.cases.iter().filter(|c| c.status == status).count()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
