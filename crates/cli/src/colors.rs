// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for the routing trace.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

/// ANSI 256-color codes for trace output
pub mod codes {
    /// Outcome line labels: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Role names and arrows: light grey
    pub const LITERAL: u8 = 250;
    /// Status markers and descriptions: medium grey
    pub const CONTEXT: u8 = 245;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    pub const CONTEXT_START: &str = "\x1b[38;5;245m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    // Default: enable colors only if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Apply header color (outcome labels) to text.
pub fn header(text: &str) -> String {
    format!("{}{}{}", fg256(codes::HEADER), text, RESET)
}

/// Apply literal color (role names) to text.
pub fn literal(text: &str) -> String {
    format!("{}{}{}", fg256(codes::LITERAL), text, RESET)
}

/// Apply context color (statuses, descriptions) to text.
pub fn context(text: &str) -> String {
    format!("{}{}{}", fg256(codes::CONTEXT), text, RESET)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
