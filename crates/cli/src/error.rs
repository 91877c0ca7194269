// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hubq_core::QualifierApplicationError;
use thiserror::Error;

/// All possible errors that can occur in the hubq CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'hubq init' first or pass --snapshot")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("issue not found: #{0}")]
    IssueNotFound(u64),

    #[error("{0}")]
    Filter(#[from] hubq_core::Error),

    #[error("'{expression}' cannot be applied to an issue\n  hint: use only title, milestone, label, assignee and state qualifiers joined by AND; only label may repeat")]
    NotApplicable { expression: String },

    #[error("issue #{id}: {source}")]
    Apply {
        id: u64,
        #[source]
        source: QualifierApplicationError,
    },

    #[error("either --drop or --keep is required")]
    PruneKindsRequired,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("snapshot error: {path}: {reason}")]
    Snapshot { path: String, reason: String },
}

/// A specialized Result type for hubqrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
