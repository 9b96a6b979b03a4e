// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use probe_core::format_elapsed_ms;
use probe_engine::{CaseReport, SuiteReport};

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One result line, with the failure message indented below it.
///
/// `PASS  basic / version (12ms)`
pub fn format_case(case: &CaseReport, colorize: bool) -> String {
    let label = case.status.label();
    let elapsed = format!("({})", format_elapsed_ms(case.elapsed_ms));
    let (label, elapsed) = if colorize {
        (
            crate::color::apply_status(label),
            crate::color::apply_muted(&elapsed),
        )
    } else {
        (label.to_string(), elapsed)
    };

    let mut out = format!("{}  {} / {} {}", label, case.group, case.name, elapsed);
    if let Some(message) = &case.message {
        for line in message.lines() {
            out.push('\n');
            if !line.is_empty() {
                out.push_str("    ");
                out.push_str(line);
            }
        }
    }
    out
}

/// Final summary line, e.g. `3 passed, 1 failed (1 timed out) in 2.4s`
pub fn format_summary(report: &SuiteReport) -> String {
    format!(
        "{} in {}",
        report.summary(),
        format_elapsed_ms(report.elapsed_ms())
    )
}

pub fn print_case(case: &CaseReport) {
    println!("{}", format_case(case, crate::color::should_colorize()));
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
