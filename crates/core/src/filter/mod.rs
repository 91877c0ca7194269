// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expressions for querying and editing issues.
//!
//! One expression serves two purposes: as a query it selects the issues it
//! is satisfied by, and as an edit it is applied to an issue to set the
//! fields it names.
//!
//! ```text
//! label:bug assignee:alice          # AND by juxtaposition
//! milestone:v1 OR milestone:v2
//! NOT is:closed
//! id:>100 created:>=2024-01-01
//! label:priority.                   # any label in the priority group
//! crash                             # keyword in title or body
//! ```
//!
//! # Qualifiers
//!
//! `id`, `keyword`, `title`, `body`, `milestone`, `label`, `assignee`,
//! `author`, `involves`, `state`, `has`, `no`, `is`, `created`, `updated`.
//!
//! Only `title`, `milestone`, `label`, `assignee` and `state` can be
//! applied, and only inside conjunctions. `label` may repeat; any other
//! kind appearing twice makes the expression inapplicable.

mod apply;
mod eval;
mod expr;
mod parser;
mod rewrite;

pub use apply::has_conflicting_kinds;
pub use expr::{
    CompareOp, Comparison, FilterExpression, Qualifier, QualifierKind, QualifierValue, ValueType,
};
pub use parser::{parse_filter, MAX_DEPTH};
