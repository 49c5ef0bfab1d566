// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! deskrs - library behind the `desk` binary.
//!
//! A toy help desk demonstrating mediator-based message routing: the
//! program prompts for an issue topic and description, runs the issue
//! through the [`desk_core::Crm`] mediator once, and prints one trace
//! line per hand-off plus the final notification.
//!
//! # Main Components
//!
//! - [`run`] - the whole program: one interactive report session
//! - [`colors`] - ANSI-256 helpers for the trace output
//! - [`Error`] - error types for session I/O

mod prompt;
mod render;
mod session;

pub mod colors;
pub mod error;

pub use error::{Error, Result};

/// Run one report session on the process's stdin and stdout. This is
/// the entry point for the binary and a testable way to drive a session
/// without process execution.
pub fn run() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(stdin.lock(), stdout.lock())
}
