// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide working directory, saved and restored around a scope.

use std::path::{Path, PathBuf};

/// Changes the harness's working directory and restores the previous one
/// when dropped, including on early return and unwinding.
///
/// The working directory is process-wide state; callers that use this guard
/// must not run cases concurrently.
#[must_use = "the previous directory is restored when the guard is dropped"]
#[derive(Debug)]
pub struct WorkdirGuard {
    previous: PathBuf,
}

impl WorkdirGuard {
    /// Enter `dir`, remembering the current directory
    pub fn enter(dir: &Path) -> std::io::Result<Self> {
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(dir)?;
        tracing::debug!(from = %previous.display(), to = %dir.display(), "entered directory");
        Ok(Self { previous })
    }

    /// Directory that will be restored
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            tracing::error!(dir = %self.previous.display(), error = %e, "failed to restore directory");
        }
    }
}

#[cfg(test)]
#[path = "workdir_tests.rs"]
mod tests;
