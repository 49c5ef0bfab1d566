// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Participants in the help-desk exchange: the client who reports an
//! issue and the staff who hold a working copy while they act on it.
//!
//! Staff members never address each other. They return the updated
//! issue to the caller and the mediator decides who sees it next.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decision::{CoinFlip, DecisionSource, SupportAction};
use crate::error::{Error, Result};
use crate::issue::{Issue, IssueStatus};

/// Role a participant plays in the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Reports issues and receives notifications.
    Client,
    /// First line of support.
    Supporter,
    /// Handles escalated issues.
    Programmer,
    /// Staff role with no routing rule. Deliveries sent from it are
    /// dropped by the mediator.
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Supporter => "supporter",
            Role::Programmer => "programmer",
            Role::Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "client" => Ok(Role::Client),
            "supporter" => Ok(Role::Supporter),
            "programmer" => Ok(Role::Programmer),
            "manager" => Ok(Role::Manager),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// The customer side of the exchange.
///
/// A client originates issues but keeps no copy of them. Everything it
/// learns afterwards arrives through [`Client::notify`] and is retained
/// in delivery order.
#[derive(Debug, Clone, Default)]
pub struct Client {
    notifications: Vec<Issue>,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh issue to hand to the mediator. The new issue
    /// always starts out [`IssueStatus::New`].
    pub fn report_issue(&self, topic: String, description: String) -> Issue {
        let issue = Issue::new(topic, description);
        tracing::debug!(topic = %issue.topic, "client reported issue");
        issue
    }

    /// Records an issue delivered back to the client.
    pub fn notify(&mut self, issue: Issue) {
        tracing::debug!(topic = %issue.topic, status = %issue.status, "client notified");
        self.notifications.push(issue);
    }

    /// Notifications received so far, oldest first.
    pub fn notifications(&self) -> &[Issue] {
        &self.notifications
    }
}

/// First-line support staff.
///
/// On receiving an issue the supporter consults its decision source and
/// either resolves or escalates in the same step. The names are a term
/// of art on this desk: [`Supporter::resolve_issue`] marks the issue
/// [`IssueStatus::InProgress`] (the supporter took it on), while
/// [`Supporter::escalate_issue`] marks it [`IssueStatus::Resolved`]
/// from the supporter's point of view and passes it up the chain.
#[derive(Debug)]
pub struct Supporter<D: DecisionSource = CoinFlip> {
    decider: D,
    issue: Option<Issue>,
}

impl Supporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DecisionSource + Default> Default for Supporter<D> {
    fn default() -> Self {
        Self::with_decider(D::default())
    }
}

impl<D: DecisionSource> Supporter<D> {
    pub fn with_decider(decider: D) -> Self {
        Self { decider, issue: None }
    }

    /// Takes custody of an issue and immediately acts on it.
    pub fn set_issue(&mut self, issue: Issue) -> Result<Issue> {
        tracing::debug!(topic = %issue.topic, status = %issue.status, "supporter took issue");
        self.issue = Some(issue);
        match self.decider.choose() {
            SupportAction::Resolve => self.resolve_issue(),
            SupportAction::Escalate => self.escalate_issue(),
        }
    }

    /// Marks the held issue [`IssueStatus::InProgress`] and returns the
    /// updated copy for forwarding.
    pub fn resolve_issue(&mut self) -> Result<Issue> {
        let issue = self.issue.as_mut().ok_or(Error::NoIssueAssigned {
            role: Role::Supporter,
        })?;
        issue.status = IssueStatus::InProgress;
        tracing::debug!(topic = %issue.topic, "supporter kept issue in progress");
        Ok(issue.clone())
    }

    /// Marks the held issue [`IssueStatus::Resolved`] and returns the
    /// updated copy for forwarding.
    pub fn escalate_issue(&mut self) -> Result<Issue> {
        let issue = self.issue.as_mut().ok_or(Error::NoIssueAssigned {
            role: Role::Supporter,
        })?;
        issue.status = IssueStatus::Resolved;
        tracing::debug!(topic = %issue.topic, "supporter escalated issue");
        Ok(issue.clone())
    }

    /// Working copy currently held, if any.
    pub fn issue(&self) -> Option<&Issue> {
        self.issue.as_ref()
    }
}

/// Second-line staff for issues the supporter could not close.
#[derive(Debug, Clone, Default)]
pub struct Programmer {
    issue: Option<Issue>,
}

impl Programmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes custody of an issue and resolves it in the same step.
    pub fn set_issue(&mut self, issue: Issue) -> Result<Issue> {
        tracing::debug!(topic = %issue.topic, status = %issue.status, "programmer took issue");
        self.issue = Some(issue);
        self.resolve_issue()
    }

    /// Marks the held issue [`IssueStatus::Resolved`] and returns the
    /// updated copy for forwarding.
    pub fn resolve_issue(&mut self) -> Result<Issue> {
        let issue = self.issue.as_mut().ok_or(Error::NoIssueAssigned {
            role: Role::Programmer,
        })?;
        issue.status = IssueStatus::Resolved;
        tracing::debug!(topic = %issue.topic, "programmer resolved issue");
        Ok(issue.clone())
    }

    /// Working copy currently held, if any.
    pub fn issue(&self) -> Option<&Issue> {
        self.issue.as_ref()
    }
}

#[cfg(test)]
#[path = "participant_tests.rs"]
mod tests;
