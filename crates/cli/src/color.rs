// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Group headers: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Secondary text such as elapsed times: darker grey
    pub const MUTED: u8 = 240;
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

/// Apply header color unconditionally (caller decides whether to use this).
pub(crate) fn apply_header(text: &str) -> String {
    format!("{}{}{}", fg256(codes::HEADER), text, RESET)
}

/// Apply muted color unconditionally (caller decides whether to use this).
pub(crate) fn apply_muted(text: &str) -> String {
    format!("{}{}{}", fg256(codes::MUTED), text, RESET)
}

/// Apply status color unconditionally (caller decides whether to use this).
///
/// Green for `PASS`, red for `FAIL`, yellow for `TIME`; anything else is
/// returned untouched.
pub(crate) fn apply_status(label: &str) -> String {
    let code = match label {
        "PASS" => "\x1b[32m",
        "FAIL" => "\x1b[31m",
        "TIME" => "\x1b[33m",
        _ => return label.to_string(),
    };
    format!("{code}{label}{RESET}")
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
