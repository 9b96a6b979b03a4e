// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential suite runner.
//!
//! Cases run strictly one after another in file order. A failing case is
//! recorded and the next case starts; nothing is retried.

use crate::asserter::Asserter;
use crate::report::{CaseReport, SuiteReport};
use crate::workdir::WorkdirGuard;
use probe_adapters::ProcessAdapter;
use probe_suite::{Case, Group, Suite};
use tracing::Instrument;

/// Selects which cases run
#[derive(Debug, Clone, Default)]
pub struct CaseFilter {
    /// Exact group name
    pub group: Option<String>,
    /// Substring of the case name
    pub name: Option<String>,
}

impl CaseFilter {
    pub fn matches_group(&self, group: &Group) -> bool {
        self.group.as_deref().map_or(true, |g| g == group.name)
    }

    pub fn matches_case(&self, case: &Case) -> bool {
        self.name.as_deref().map_or(true, |n| case.name.contains(n))
    }
}

pub struct SuiteRunner<P> {
    asserter: Asserter<P>,
}

impl<P: ProcessAdapter> SuiteRunner<P> {
    pub fn new(adapter: P) -> Self {
        Self {
            asserter: Asserter::new(adapter),
        }
    }

    /// Run every selected case, calling `on_case` as each one finishes.
    pub async fn run(
        &mut self,
        suite: &Suite,
        filter: &CaseFilter,
        mut on_case: impl FnMut(&CaseReport),
    ) -> SuiteReport {
        let mut report = SuiteReport::default();
        for group in suite.groups.iter().filter(|g| filter.matches_group(g)) {
            let cases: Vec<&Case> = group.cases.iter().filter(|c| filter.matches_case(c)).collect();
            if cases.is_empty() {
                continue;
            }

            // Restored when the group ends, whatever its cases did
            let _workdir = match &group.cwd {
                Some(dir) => match WorkdirGuard::enter(dir) {
                    Ok(guard) => Some(guard),
                    Err(e) => {
                        tracing::error!(group = %group.name, dir = %dir.display(), error = %e, "cannot enter group directory");
                        for case in cases {
                            let case_report = CaseReport {
                                group: group.name.clone(),
                                name: case.name.clone(),
                                status: crate::CaseStatus::Failed,
                                elapsed_ms: 0,
                                message: Some(format!("cannot enter {}: {}", dir.display(), e)),
                            };
                            on_case(&case_report);
                            report.cases.push(case_report);
                        }
                        continue;
                    }
                },
                None => None,
            };

            for case in cases {
                let case_report = self.run_case(&group.name, case).await;
                on_case(&case_report);
                report.cases.push(case_report);
            }
        }
        tracing::info!(
            passed = report.passed(),
            failed = report.failed(),
            "suite finished"
        );
        report
    }

    /// Run a single case under its own deadline
    pub async fn run_case(&mut self, group: &str, case: &Case) -> CaseReport {
        let span = tracing::info_span!("suite.case", group, case = %case.name);
        self.asserter.set_deadline(case.deadline);
        let start = std::time::Instant::now();
        let result = self
            .asserter
            .check(&case.invocation, &case.expectation, case.failing)
            .instrument(span.clone())
            .await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        span.in_scope(|| match &result {
            Ok(()) => tracing::info!(elapsed_ms, "passed"),
            Err(e) => tracing::info!(elapsed_ms, error = %e, "failed"),
        });
        CaseReport::new(group, &case.name, result, elapsed_ms)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
