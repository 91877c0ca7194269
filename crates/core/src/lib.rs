// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hubq-core: Filter expression engine for issue trackers
//!
//! This crate provides the issue model, entity resolution and the filter
//! expression engine used by the hubq CLI.

pub mod error;
pub mod filter;
pub mod issue;
pub mod model;

pub use error::{Error, QualifierApplicationError, Result};
pub use filter::{parse_filter, FilterExpression, Qualifier, QualifierKind, QualifierValue};
pub use issue::{Issue, IssueState, Label, Milestone, User};
pub use model::{Model, Resolver};
