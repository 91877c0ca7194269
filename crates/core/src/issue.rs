// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for hubq.
//!
//! This module contains the tracked item ([`Issue`]) and the repository
//! entities it refers to by name: [`Label`], [`Milestone`] and [`User`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Delimiter for exclusive label groups (`priority.high`).
const EXCLUSIVE_DELIMITER: char = '.';
/// Delimiter for non-exclusive label groups (`area-ui`).
const SHARED_DELIMITER: char = '-';

/// Open/closed state of an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
}

impl IssueState {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(IssueState::Open),
            "closed" => Ok(IssueState::Closed),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// The tracked work item that filters are evaluated against and applied to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number, unique within the repository.
    pub id: u64,
    /// Short description of the work.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub body: String,
    /// Open or closed.
    #[serde(default)]
    pub state: IssueState,
    /// True for pull requests, which share the issue namespace.
    #[serde(default)]
    pub pull_request: bool,
    /// Login of the user who opened the issue.
    pub author: String,
    /// Login of the assigned user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Id of the milestone this issue belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    /// Names of attached labels.
    #[serde(default)]
    pub labels: Vec<String>,
    /// When the issue was opened.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Creates an open issue with no labels, assignee or milestone.
    pub fn new(id: u64, title: String, author: String, created_at: DateTime<Utc>) -> Self {
        Issue {
            id,
            title,
            body: String::new(),
            state: IssueState::Open,
            pull_request: false,
            author,
            assignee: None,
            milestone: None,
            labels: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns true if a label with this name (case-insensitive) is attached.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| eq_ignore_case(l, name))
    }
}

/// A repository label.
///
/// Label names may carry a group: `priority.high` belongs to the exclusive
/// group `priority` (an issue holds at most one label of it), while
/// `area-ui` belongs to the shared group `area`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Label { name: name.into() }
    }

    /// Group part of the name, if any.
    pub fn group(&self) -> Option<&str> {
        split_label(&self.name).0
    }

    /// Name part, without the group.
    pub fn short_name(&self) -> &str {
        split_label(&self.name).1
    }

    /// Returns true if the label belongs to an exclusive group.
    pub fn is_exclusive(&self) -> bool {
        exclusive_group(&self.name).is_some()
    }
}

/// Group of a label name if the group is exclusive.
pub fn exclusive_group(name: &str) -> Option<&str> {
    match name.find(EXCLUSIVE_DELIMITER) {
        Some(i) if i > 0 => Some(&name[..i]),
        _ => None,
    }
}

/// Split a label name into `(group, name)`.
///
/// The exclusive delimiter takes precedence over the shared one. A leading
/// delimiter does not start a group.
pub fn split_label(name: &str) -> (Option<&str>, &str) {
    let pos = name
        .find(EXCLUSIVE_DELIMITER)
        .or_else(|| name.find(SHARED_DELIMITER));
    match pos {
        Some(i) if i > 0 => (Some(&name[..i]), &name[i + 1..]),
        _ => (None, name),
    }
}

/// Compare two names ignoring case, with full Unicode lowering.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A repository milestone, referenced from issues by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub title: String,
    #[serde(default = "default_open")]
    pub open: bool,
}

fn default_open() -> bool {
    true
}

/// A collaborator who can author or be assigned issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Returns true if `query` equals the login or display name, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        eq_ignore_case(&self.login, query)
            || self
                .name
                .as_deref()
                .is_some_and(|n| eq_ignore_case(n, query))
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
