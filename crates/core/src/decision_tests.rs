// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    resolve = { SupportAction::Resolve, "resolve" },
    escalate = { SupportAction::Escalate, "escalate" },
)]
fn support_action_as_str(action: SupportAction, expected: &str) {
    assert_eq!(action.as_str(), expected);
    assert_eq!(action.to_string(), expected);
}

#[test]
fn support_action_serialization() {
    let json = serde_json::to_string(&SupportAction::Escalate).unwrap();
    assert_eq!(json, "\"escalate\"");
    let parsed: SupportAction = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, SupportAction::Escalate);
}

#[test]
fn seeded_coin_flip_is_deterministic() {
    let mut a = CoinFlip::with_seed(7);
    let mut b = CoinFlip::with_seed(7);

    let first: Vec<SupportAction> = (0..32).map(|_| a.choose()).collect();
    let second: Vec<SupportAction> = (0..32).map(|_| b.choose()).collect();
    assert_eq!(first, second);
}

#[test]
fn coin_flip_produces_both_actions() {
    // 64 draws from a fixed seed; both branches must show up.
    let mut flip = CoinFlip::with_seed(42);
    let draws: Vec<SupportAction> = (0..64).map(|_| flip.choose()).collect();

    assert!(draws.contains(&SupportAction::Resolve));
    assert!(draws.contains(&SupportAction::Escalate));
}

#[test]
fn decision_source_mut_ref_delegation() {
    struct Alternating {
        resolve_next: bool,
    }

    impl DecisionSource for Alternating {
        fn choose(&mut self) -> SupportAction {
            self.resolve_next = !self.resolve_next;
            if self.resolve_next {
                SupportAction::Resolve
            } else {
                SupportAction::Escalate
            }
        }
    }

    fn draw(mut source: impl DecisionSource) -> SupportAction {
        source.choose()
    }

    // Passing &mut exercises the blanket impl and shares the state.
    let mut source = Alternating { resolve_next: true };
    let first = draw(&mut source);
    let second = draw(&mut source);
    assert_eq!(first, SupportAction::Escalate);
    assert_eq!(second, SupportAction::Resolve);
}
