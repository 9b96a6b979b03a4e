// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

// --- Target ---

/// Executable under test, when not given with `--exe`
pub fn executable() -> Option<String> {
    std::env::var("PROBE_EXECUTABLE")
        .ok()
        .filter(|s| !s.is_empty())
}

/// Raw `PROBE_TIMEOUT_SECS`; parsed by the command so bad values are reported
pub fn timeout_secs() -> Option<String> {
    std::env::var("PROBE_TIMEOUT_SECS")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

// --- Logging ---

pub fn log_filter() -> Option<String> {
    std::env::var("PROBE_LOG").ok().filter(|s| !s.is_empty())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
