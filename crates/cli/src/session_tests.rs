// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use desk_core::SupportAction;
use std::io::Cursor;

/// Decision source that always picks the same action.
struct Fixed(SupportAction);

impl DecisionSource for Fixed {
    fn choose(&mut self) -> SupportAction {
        self.0
    }
}

fn transcript(action: SupportAction, stdin: &str) -> String {
    let mut crm = Crm::with_decider(Fixed(action));
    let mut output = Vec::new();
    run_desk(&mut crm, Cursor::new(stdin), &mut output, false).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn resolve_session_prints_full_trace() {
    let out = transcript(SupportAction::Resolve, "Login fails\nCannot log in\n");
    assert_eq!(
        out,
        concat!(
            "topic: description: \n",
            "client -> supporter  [new]\n",
            "supporter -> programmer  [in_progress]\n",
            "programmer -> client  [resolved]\n",
            "\n",
            "client notified: Login fails [resolved]\n",
            "  Cannot log in\n",
        )
    );
}

#[test]
fn escalate_session_skips_programmer() {
    let out = transcript(SupportAction::Escalate, "Login fails\nCannot log in\n");
    assert_eq!(
        out,
        concat!(
            "topic: description: \n",
            "client -> supporter  [new]\n",
            "supporter -> client  [resolved]\n",
            "\n",
            "client notified: Login fails [resolved]\n",
            "  Cannot log in\n",
        )
    );
}

#[test]
fn empty_input_still_routes_an_issue() {
    let out = transcript(SupportAction::Escalate, "");
    assert_eq!(
        out,
        concat!(
            "topic: description: \n",
            "client -> supporter  [new]\n",
            "supporter -> client  [resolved]\n",
            "\n",
            "client notified:  [resolved]\n",
        )
    );
}

#[test]
fn colored_session_emits_escape_sequences() {
    let mut crm = Crm::with_decider(Fixed(SupportAction::Escalate));
    let mut output = Vec::new();
    run_desk(
        &mut crm,
        Cursor::new("Login fails\nCannot log in\n"),
        &mut output,
        true,
    )
    .unwrap();

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("\x1b[38;5;"));
    assert!(out.contains("Login fails"));
}
