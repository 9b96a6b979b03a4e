// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution helpers

use crate::deadline::{DeadlineExceeded, TimeoutGuard};
use probe_core::{Deadline, Invocation};
use std::process::{Output, Stdio};
use thiserror::Error;
use tokio::process::Command;

/// Errors from running a subprocess under a deadline
#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("{description} failed: {source}")]
    Io {
        description: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{description} {source}")]
    Deadline {
        description: String,
        #[source]
        source: DeadlineExceeded,
    },
}

/// Build a tokio command for an invocation.
///
/// stdin is closed so a child never waits on the harness's terminal, and the
/// child is killed when its handle is dropped (which is what happens when
/// the deadline wins the race).
pub fn command_for(invocation: &Invocation) -> Command {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = &invocation.cwd {
        cmd.current_dir(dir);
    }
    for (key, value) in &invocation.env {
        cmd.env(key, value);
    }
    cmd
}

/// Run a subprocess command under `deadline`.
///
/// Wraps `Command::output()` with the timeout guard. A non-zero exit is not
/// an error here; callers classify the exit status themselves.
pub async fn run_with_deadline(
    guard: &mut TimeoutGuard,
    mut cmd: Command,
    deadline: Deadline,
    description: &str,
) -> Result<Output, SubprocessError> {
    match guard.run(deadline, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(io_err)) => Err(SubprocessError::Io {
            description: description.to_string(),
            source: io_err,
        }),
        Err(exceeded) => Err(SubprocessError::Deadline {
            description: description.to_string(),
            source: exceeded,
        }),
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
