// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The CRM mediator. Every issue moves between participants through
//! [`Crm::send`], which consults the routing table and records each
//! hand-off in an append-only trace.
//!
//! Participants hold no reference to the mediator or to each other.
//! Staff return the updated issue to the mediator and the mediator
//! decides who sees it next, so adding a role touches the routing
//! table and nothing else.

use serde::{Deserialize, Serialize};

use crate::decision::{CoinFlip, DecisionSource};
use crate::error::Result;
use crate::issue::{Issue, IssueStatus};
use crate::participant::{Client, Programmer, Role, Supporter};

/// Where the routing table can point a delivery.
///
/// A separate type from [`Role`]: only these three roles ever receive,
/// so dispatch on a `Recipient` needs no dead arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Supporter,
    Programmer,
    Client,
}

impl Recipient {
    pub fn role(&self) -> Role {
        match self {
            Recipient::Supporter => Role::Supporter,
            Recipient::Programmer => Role::Programmer,
            Recipient::Client => Role::Client,
        }
    }
}

/// Routing table for the help desk.
///
/// | sender     | status at hand-off | recipient  |
/// |------------|--------------------|------------|
/// | client     | any                | supporter  |
/// | supporter  | in_progress        | programmer |
/// | supporter  | new, resolved      | client     |
/// | programmer | any                | client     |
/// | manager    | any                | none       |
///
/// `None` means the sender has no route and the delivery is dropped.
pub fn route(sender: Role, status: IssueStatus) -> Option<Recipient> {
    match (sender, status) {
        (Role::Client, _) => Some(Recipient::Supporter),
        (Role::Supporter, IssueStatus::InProgress) => Some(Recipient::Programmer),
        (Role::Supporter, _) => Some(Recipient::Client),
        (Role::Programmer, _) => Some(Recipient::Client),
        (Role::Manager, _) => None,
    }
}

/// One recorded hand-off. `status` is the issue's status at the moment
/// the mediator handed it over, before the recipient acted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Hop {
    pub sender: Role,
    pub recipient: Role,
    pub status: IssueStatus,
}

/// Outcome of a [`Crm::send`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// The issue reached the client; this is the copy they saw.
    Delivered { issue: Issue },
    /// The sender has no routing rule. Nothing was handed off and no
    /// hop was recorded.
    Dropped { sender: Role },
}

/// The mediator. Owns every participant and the hop trace.
#[derive(Debug)]
pub struct Crm<D: DecisionSource = CoinFlip> {
    client: Client,
    supporter: Supporter<D>,
    programmer: Programmer,
    trace: Vec<Hop>,
}

impl Crm {
    /// A desk whose supporter flips a coin on every issue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DecisionSource + Default> Default for Crm<D> {
    fn default() -> Self {
        Self::with_decider(D::default())
    }
}

impl<D: DecisionSource> Crm<D> {
    /// A desk whose supporter consults the given decision source.
    pub fn with_decider(decider: D) -> Self {
        Self {
            client: Client::new(),
            supporter: Supporter::with_decider(decider),
            programmer: Programmer::new(),
            trace: Vec::new(),
        }
    }

    /// Reports a fresh issue on the client's behalf and routes it to
    /// completion.
    pub fn report_issue(&mut self, topic: String, description: String) -> Result<Delivery> {
        let issue = self.client.report_issue(topic, description);
        self.send(Role::Client, issue)
    }

    /// Routes an issue hop by hop until it reaches the client or the
    /// sender turns out to have no route.
    ///
    /// Each hand-off appends a [`Hop`] before the recipient acts. Staff
    /// recipients act on the issue and the updated copy is routed again
    /// under their name; delivery to the client ends the exchange.
    pub fn send(&mut self, sender: Role, issue: Issue) -> Result<Delivery> {
        let mut sender = sender;
        let mut issue = issue;
        loop {
            let Some(recipient) = route(sender, issue.status) else {
                tracing::warn!(sender = %sender, "no route for sender, dropping delivery");
                return Ok(Delivery::Dropped { sender });
            };
            tracing::debug!(
                from = %sender,
                to = %recipient.role(),
                status = %issue.status,
                "handing off issue"
            );
            self.trace.push(Hop {
                sender,
                recipient: recipient.role(),
                status: issue.status,
            });
            match recipient {
                Recipient::Supporter => {
                    issue = self.supporter.set_issue(issue)?;
                    sender = Role::Supporter;
                }
                Recipient::Programmer => {
                    issue = self.programmer.set_issue(issue)?;
                    sender = Role::Programmer;
                }
                Recipient::Client => {
                    self.client.notify(issue.clone());
                    return Ok(Delivery::Delivered { issue });
                }
            }
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn supporter(&self) -> &Supporter<D> {
        &self.supporter
    }

    pub fn programmer(&self) -> &Programmer {
        &self.programmer
    }

    /// Every hand-off so far, oldest first. The trace only grows.
    pub fn trace(&self) -> &[Hop] {
        &self.trace
    }
}

#[cfg(test)]
#[path = "mediator_tests.rs"]
mod tests;
