// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hubq-core operations.

use thiserror::Error;

use crate::filter::{Qualifier, QualifierKind};

/// All possible errors that can occur while parsing filters or reading
/// model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("empty filter expression")]
    FilterEmpty,

    #[error("unknown qualifier: '{name}'\n  hint: valid qualifiers are: {}", QualifierKind::valid_names())]
    UnknownQualifier { name: String },

    #[error("invalid value for {kind}: {reason}")]
    InvalidQualifierValue { kind: QualifierKind, reason: String },

    #[error("unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unexpected end of filter expression\n  hint: {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unterminated quoted string starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("filter expression nested too deeply at position {position}\n  hint: at most {} levels of NOT, parentheses and operators are allowed; split long chains into parenthesized groups", crate::filter::MAX_DEPTH)]
    FilterTooDeep { position: usize },

    #[error("invalid state: '{0}'\n  hint: valid states are: open, closed")]
    InvalidState(String),
}

/// A specialized Result type for hubq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to apply a filter expression to an issue.
///
/// Application is best-effort: qualifiers applied before the failing one
/// keep their effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QualifierApplicationError {
    #[error("cannot apply '{qualifier}': no {entity} named '{name}'")]
    Unresolved {
        qualifier: Qualifier,
        entity: &'static str,
        name: String,
    },

    #[error("cannot apply '{qualifier}': {reason}")]
    Rejected { qualifier: Qualifier, reason: String },

    #[error("cannot apply '{qualifier}': {} qualifiers only filter issues", .qualifier.kind)]
    ReadOnly { qualifier: Qualifier },

    #[error("cannot apply {operator} expressions to an issue")]
    Unsupported { operator: &'static str },
}

impl QualifierApplicationError {
    /// The qualifier that failed, if the failure came from a qualifier.
    pub fn qualifier(&self) -> Option<&Qualifier> {
        match self {
            QualifierApplicationError::Unresolved { qualifier, .. }
            | QualifierApplicationError::Rejected { qualifier, .. }
            | QualifierApplicationError::ReadOnly { qualifier } => Some(qualifier),
            QualifierApplicationError::Unsupported { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
