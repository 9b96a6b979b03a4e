// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `probe run` - run the cases of a suite file

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use probe_adapters::{SubprocessAdapter, TracedProcess};
use probe_engine::{CaseFilter, SuiteRunner};
use probe_suite::{load_suite, resolve_program, suite_dir, LoadOptions};

use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct RunArgs {
    /// Suite file (TOML, or JSON by extension)
    pub suite: PathBuf,

    /// Executable under test, replacing the suite's; relative paths resolve
    /// against the suite directory, bare names use PATH [env: PROBE_EXECUTABLE]
    #[arg(long = "exe", value_name = "PATH")]
    pub exe: Option<String>,

    /// Default per-case deadline in seconds [env: PROBE_TIMEOUT_SECS]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Only run cases whose name contains this text
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Only run the group with this name
    #[arg(long, value_name = "NAME")]
    pub group: Option<String>,
}

pub async fn handle(args: RunArgs, format: OutputFormat) -> Result<()> {
    let options = LoadOptions {
        executable: executable_override(&args.suite, args.exe),
        timeout: super::deadline_override(args.timeout)?,
    };
    let suite =
        load_suite(&args.suite, &options).map_err(|e| ExitError::new(2, e.to_string()))?;
    let filter = CaseFilter {
        group: args.group,
        name: args.filter,
    };

    tracing::info!(suite = %args.suite.display(), cases = suite.case_count(), "running suite");
    let mut runner = SuiteRunner::new(TracedProcess::new(SubprocessAdapter::new()));
    let report = runner
        .run(&suite, &filter, |case| {
            if format == OutputFormat::Text {
                output::print_case(case);
            }
        })
        .await;

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", output::format_summary(&report));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.all_passed() {
        Ok(())
    } else {
        Err(ExitError::silent(1).into())
    }
}

/// `--exe`, then `PROBE_EXECUTABLE`, resolved against the suite directory
fn executable_override(suite: &Path, flag: Option<String>) -> Option<PathBuf> {
    let exe = flag.or_else(crate::env::executable)?;
    Some(resolve_program(&suite_dir(suite), &exe))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
