// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for desk-core operations.

use thiserror::Error;

use crate::participant::Role;

/// All possible errors that can occur in desk-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no issue assigned to {role}\n  hint: route an issue to this participant before resolving or escalating")]
    NoIssueAssigned { role: Role },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: new, in_progress, resolved")]
    InvalidStatus(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: client, supporter, programmer, manager")]
    InvalidRole(String),
}

/// A specialized Result type for desk-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
