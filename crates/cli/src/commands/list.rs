// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `probe list` - show a suite's groups and cases without running them

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use probe_suite::{read_suite, SuiteFile};
use serde::Serialize;

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ListArgs {
    /// Suite file (TOML, or JSON by extension)
    pub suite: PathBuf,
}

#[derive(Debug, Serialize, PartialEq)]
struct GroupEntry {
    name: String,
    cases: Vec<CaseEntry>,
}

#[derive(Debug, Serialize, PartialEq)]
struct CaseEntry {
    name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    failing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<u64>,
}

pub fn handle(args: ListArgs, format: OutputFormat) -> Result<()> {
    let file = read_suite(&args.suite).map_err(|e| ExitError::new(2, e.to_string()))?;
    let groups = entries(&file);
    match format {
        OutputFormat::Text => print!("{}", format_text(&groups, crate::color::should_colorize())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&groups)?),
    }
    Ok(())
}

fn entries(file: &SuiteFile) -> Vec<GroupEntry> {
    file.groups
        .iter()
        .map(|group| GroupEntry {
            name: group.name.clone(),
            cases: group
                .cases
                .iter()
                .map(|case| CaseEntry {
                    name: case.name.clone(),
                    failing: case.failing,
                    timeout: case.timeout,
                })
                .collect(),
        })
        .collect()
}

fn format_text(groups: &[GroupEntry], colorize: bool) -> String {
    let mut out = String::new();
    for group in groups {
        if colorize {
            out.push_str(&crate::color::apply_header(&group.name));
        } else {
            out.push_str(&group.name);
        }
        out.push('\n');
        for case in &group.cases {
            out.push_str("  ");
            out.push_str(&case.name);
            if case.failing {
                out.push_str(" (failing)");
            }
            if let Some(secs) = case.timeout {
                out.push_str(&format!(" [{}s]", secs));
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
