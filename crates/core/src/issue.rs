// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the desk router.
//!
//! This module contains the fundamental data types: Issue and IssueStatus.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Freshly reported by the client. Initial state for new issues.
    New,
    /// Handled by first-line support; deeper work follows.
    InProgress,
    /// Closed out. Terminal state for the routing chain.
    Resolved,
}

impl IssueStatus {
    /// Returns the string representation used in display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::New => "new",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Resolved => "resolved",
        }
    }

    /// Returns true if this is the terminal state (resolved).
    pub fn is_terminal(&self) -> bool {
        matches!(self, IssueStatus::Resolved)
    }

    /// Check whether advancing from this status to target moves forward.
    ///
    /// Statuses only progress: `new → in_progress`, `new → resolved`,
    /// `in_progress → resolved`. Nothing at runtime rejects a backward
    /// write; participants follow this convention and the routing chain
    /// relies on it to terminate.
    pub fn can_advance_to(&self, target: IssueStatus) -> bool {
        matches!(
            (self, target),
            (IssueStatus::New, IssueStatus::InProgress)
                | (IssueStatus::New, IssueStatus::Resolved)
                | (IssueStatus::InProgress, IssueStatus::Resolved)
        )
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "new" => Ok(IssueStatus::New),
            "in_progress" => Ok(IssueStatus::InProgress),
            "resolved" => Ok(IssueStatus::Resolved),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// The unit of work routed through the desk.
///
/// Topic and description are set once at creation and never change; only
/// the status moves as participants hand the issue along. No validation is
/// applied on construction (empty strings are accepted as-is).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Short summary of the problem.
    pub topic: String,
    /// Longer free-text description.
    pub description: String,
    /// Current workflow state.
    pub status: IssueStatus,
}

impl Issue {
    /// Creates a new issue with status `New`.
    pub fn new(topic: String, description: String) -> Self {
        Issue {
            topic,
            description,
            status: IssueStatus::New,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.topic, self.status)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
