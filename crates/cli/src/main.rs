// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! desk - interactive help-desk router.
//!
//! Prompts for an issue topic and description, runs the issue through
//! the desk once, and prints the routing trace. Takes no arguments.
//!
//! Usage:
//!   desk

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

fn main() {
    setup_logging();
    if let Err(e) = deskrs::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so diagnostics never mix into the routing output.
/// `RUST_LOG` overrides the default `warn` filter.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
