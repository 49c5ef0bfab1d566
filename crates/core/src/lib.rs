// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! desk-core: Shared library for the desk help-desk demo
//!
//! This crate provides the issue model, the participants, and the CRM
//! mediator that routes issues between them. The desk CLI builds its
//! interactive session on top of these types.

pub mod decision;
pub mod error;
pub mod issue;
pub mod mediator;
pub mod participant;

pub use decision::{CoinFlip, DecisionSource, SupportAction};
pub use error::{Error, Result};
pub use issue::{Issue, IssueStatus};
pub use mediator::{route, Crm, Delivery, Hop, Recipient};
pub use participant::{Client, Programmer, Role, Supporter};
