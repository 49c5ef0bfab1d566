// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The supporter's resolve-or-escalate decision.
//!
//! First-line support decides how to act on each incoming issue. In the
//! real workflow that judgment is human; here it is simulated by a uniform
//! coin flip. The source of the decision is injectable so tests (and
//! reproducible runs) can pin the outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the supporter does with an issue it has been handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportAction {
    /// Handle the issue in first-line support (issue moves to `in_progress`).
    Resolve,
    /// Escalate the issue (issue moves to `resolved`).
    Escalate,
}

impl SupportAction {
    /// Returns the string representation used in display and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportAction::Resolve => "resolve",
            SupportAction::Escalate => "escalate",
        }
    }
}

impl fmt::Display for SupportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source of the supporter's resolve-or-escalate choice.
///
/// This allows injecting a deterministic decider for testing.
pub trait DecisionSource {
    /// Choose the next action.
    fn choose(&mut self) -> SupportAction;
}

impl<D: DecisionSource> DecisionSource for &mut D {
    fn choose(&mut self) -> SupportAction {
        (*self).choose()
    }
}

/// Uniform 50/50 decision source backed by `fastrand`.
#[derive(Debug)]
pub struct CoinFlip {
    rng: fastrand::Rng,
}

impl CoinFlip {
    /// Creates a coin flip seeded from system entropy.
    pub fn new() -> Self {
        CoinFlip {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a coin flip with a fixed seed for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        CoinFlip {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for CoinFlip {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionSource for CoinFlip {
    fn choose(&mut self) -> SupportAction {
        if self.rng.bool() {
            SupportAction::Resolve
        } else {
            SupportAction::Escalate
        }
    }
}

#[cfg(test)]
#[path = "decision_tests.rs"]
mod tests;
