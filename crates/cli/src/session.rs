// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One interactive report session: prompt, route, print the trace.

use std::io::{BufRead, Write};

use desk_core::{Crm, DecisionSource};

use crate::error::Result;
use crate::{colors, prompt, render};

/// Runs one report on a fresh coin-flip desk.
pub fn run(input: impl BufRead, output: impl Write) -> Result<()> {
    let mut crm = Crm::new();
    run_desk(&mut crm, input, output, colors::should_colorize())
}

/// Runs one report against the given desk: prompts for the two fields,
/// routes the issue once, then prints one line per recorded hop and the
/// final outcome.
pub(crate) fn run_desk<D: DecisionSource>(
    crm: &mut Crm<D>,
    mut input: impl BufRead,
    mut output: impl Write,
    color: bool,
) -> Result<()> {
    let topic = prompt::read_field(&mut input, &mut output, "topic")?;
    let description = prompt::read_field(&mut input, &mut output, "description")?;
    tracing::debug!(%topic, "running one exchange");

    let start = crm.trace().len();
    let delivery = crm.report_issue(topic, description)?;

    writeln!(output)?;
    for hop in &crm.trace()[start..] {
        writeln!(output, "{}", render::hop_line(hop, color))?;
    }
    writeln!(output)?;
    writeln!(output, "{}", render::outcome(&delivery, color))?;
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
