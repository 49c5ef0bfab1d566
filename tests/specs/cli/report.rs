// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the interactive `desk` session.
//!
//! The binary takes no arguments: it prompts for a topic and a
//! description, routes the issue once, and prints the trace. The
//! supporter's coin flip means a run takes one of two paths, so these
//! specs assert the parts common to both plus each path's markers.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn desk() -> Command {
    cargo_bin_cmd!("desk")
}

#[test]
fn report_session_prints_prompts_trace_and_outcome() {
    desk()
        .write_stdin("Login fails\nCannot log in\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("topic: "))
        .stdout(predicate::str::contains("description: "))
        .stdout(predicate::str::contains("client -> supporter  [new]"))
        .stdout(predicate::str::contains("-> client  [resolved]"))
        .stdout(predicate::str::contains(
            "client notified: Login fails [resolved]",
        ))
        .stdout(predicate::str::contains("Cannot log in"));
}

#[test]
fn session_takes_one_of_the_two_support_paths() {
    desk()
        .write_stdin("Login fails\nCannot log in\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("supporter -> programmer  [in_progress]")
                .or(predicate::str::contains("supporter -> client  [resolved]")),
        );
}

#[test]
fn empty_stdin_still_exits_zero() {
    desk()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("client -> supporter  [new]"))
        .stdout(predicate::str::contains("client notified:"))
        .stdout(predicate::str::contains("[resolved]"));
}

#[test]
fn empty_description_omits_description_line() {
    desk()
        .write_stdin("Login fails\n\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "client notified: Login fails [resolved]\n",
        ));
}

#[test]
fn no_color_output_is_plain() {
    desk()
        .env("NO_COLOR", "1")
        .write_stdin("Login fails\nCannot log in\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn color_env_forces_escape_sequences() {
    desk()
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .write_stdin("Login fails\nCannot log in\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;5;"));
}
