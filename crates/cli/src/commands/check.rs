// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `probe check` - assert on the output of a single command

use std::time::Instant;

use anyhow::Result;
use clap::{ArgGroup, Args};
use probe_adapters::{SubprocessAdapter, TracedProcess};
use probe_core::{split_command, Expectation, Invocation, Lookup};
use probe_engine::{Asserter, CaseReport};

use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Args)]
#[command(group(ArgGroup::new("matcher").required(true).args(["equals", "contains"])))]
pub struct CheckArgs {
    /// Deadline in seconds [env: PROBE_TIMEOUT_SECS] [default: 20]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// The command is expected to exit non-zero
    #[arg(long)]
    pub failing: bool,

    /// Expected output, compared exactly after trimming
    #[arg(long, value_name = "TEXT")]
    pub equals: Option<String>,

    /// Text the output must contain (repeatable)
    #[arg(long, value_name = "TEXT")]
    pub contains: Vec<String>,

    /// Split the command on single spaces instead of taking words as given
    #[arg(long)]
    pub split: bool,

    /// Command to run, after `--`
    #[arg(required = true, last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

pub async fn handle(args: CheckArgs, format: OutputFormat) -> Result<()> {
    let deadline = super::deadline_override(args.timeout)?.unwrap_or_default();
    let invocation = invocation(&args.command, args.split)?;
    let expectation = match args.equals {
        Some(text) => Expectation::Equals(text),
        None => Expectation::Contains(Lookup::from(args.contains)),
    };

    let mut asserter =
        Asserter::new(TracedProcess::new(SubprocessAdapter::new())).with_deadline(deadline);
    let start = Instant::now();
    let result = asserter.check(&invocation, &expectation, args.failing).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let report = CaseReport::new("check", &invocation.command_line(), result, elapsed_ms);

    match format {
        OutputFormat::Text => output::print_case(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.passed() {
        Ok(())
    } else {
        Err(ExitError::silent(1).into())
    }
}

fn invocation(command: &[String], split: bool) -> Result<Invocation> {
    let words = if split {
        split_command(&command.join(" "))
    } else {
        command.to_vec()
    };
    let mut words = words.into_iter();
    let program = words
        .next()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ExitError::new(2, "no command given".to_string()))?;
    Ok(Invocation::new(program).args(words))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
