// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting for the routing trace and the final outcome.
//!
//! Pure string builders; the session decides where they are written and
//! whether color is on.

use desk_core::{Delivery, Hop};

use crate::colors;

/// One trace line per recorded hand-off, e.g. `client -> supporter  [new]`.
pub fn hop_line(hop: &Hop, color: bool) -> String {
    let path = format!("{} -> {}", hop.sender, hop.recipient);
    let status = format!("[{}]", hop.status);
    if color {
        format!("{}  {}", colors::literal(&path), colors::context(&status))
    } else {
        format!("{path}  {status}")
    }
}

/// Final outcome of the exchange. For a delivered issue this is the
/// notification line plus the description on its own indented line when
/// one was given.
pub fn outcome(delivery: &Delivery, color: bool) -> String {
    match delivery {
        Delivery::Delivered { issue } => {
            let label = "client notified:";
            let mut out = if color {
                format!("{} {}", colors::header(label), issue)
            } else {
                format!("{label} {issue}")
            };
            if !issue.description.is_empty() {
                let desc = format!("  {}", issue.description);
                out.push('\n');
                out.push_str(&if color { colors::context(&desc) } else { desc });
            }
            out
        }
        Delivery::Dropped { sender } => {
            let line = format!("dropped: no route from {sender}");
            if color {
                colors::context(&line)
            } else {
                line
            }
        }
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
