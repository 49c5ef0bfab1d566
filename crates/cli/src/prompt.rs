// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive field prompts over injectable streams.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Prompts for one free-text field and reads a single line.
///
/// EOF counts as an empty field. The trailing newline is stripped;
/// everything else is accepted as-is, including the empty string.
pub fn read_field(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        tracing::debug!(label, "eof on input, using empty field");
        return Ok(String::new());
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
