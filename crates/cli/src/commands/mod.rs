// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod list;
pub mod run;

use crate::exit_error::ExitError;
use anyhow::Result;
use probe_core::Deadline;

/// Deadline from `--timeout`, then `PROBE_TIMEOUT_SECS`.
///
/// Zero or unparsable values are configuration errors (exit 2).
pub fn deadline_override(flag: Option<u64>) -> Result<Option<Deadline>> {
    let secs = match (flag, crate::env::timeout_secs()) {
        (Some(secs), _) => Some(secs),
        (None, Some(raw)) => Some(raw.trim().parse::<u64>().map_err(|_| {
            ExitError::new(2, format!("invalid PROBE_TIMEOUT_SECS: {:?}", raw))
        })?),
        (None, None) => None,
    };
    match secs {
        Some(0) => Err(ExitError::new(2, "timeout must be at least 1 second".to_string()).into()),
        other => Ok(other.map(Deadline::from_secs)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
