// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation wall-clock limit.
//!
//! A Deadline is a whole number of seconds. It carries no clock state of its
//! own: it is armed by the timeout guard when an invocation starts and
//! retired when the invocation returns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Wall-clock limit for a single invocation, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(u64);

impl Deadline {
    /// Deadline used when a case does not configure one.
    pub const DEFAULT: Deadline = Deadline(20);

    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn secs(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u64> for Deadline {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
#[path = "deadline_tests.rs"]
mod tests;
