// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of named repository entities.
//!
//! Filters refer to labels, milestones and users by name. A [`Resolver`]
//! turns those names into the entities an issue can carry.

use serde::{Deserialize, Serialize};

use crate::issue::{eq_ignore_case, Label, Milestone, User};

/// Read-only view of the entities an issue may refer to.
///
/// Only the three slice accessors are required; lookups are provided and
/// compare names case-insensitively.
pub trait Resolver {
    fn labels(&self) -> &[Label];
    fn milestones(&self) -> &[Milestone];
    fn users(&self) -> &[User];

    /// Find a label by its full name.
    fn find_label(&self, name: &str) -> Option<&Label> {
        self.labels()
            .iter()
            .find(|l| eq_ignore_case(&l.name, name))
    }

    /// Find a milestone by title.
    fn find_milestone(&self, title: &str) -> Option<&Milestone> {
        self.milestones()
            .iter()
            .find(|m| eq_ignore_case(&m.title, title))
    }

    /// Find a milestone by id.
    fn milestone_by_id(&self, id: u64) -> Option<&Milestone> {
        self.milestones().iter().find(|m| m.id == id)
    }

    /// Find a user by login or display name.
    fn find_user(&self, query: &str) -> Option<&User> {
        self.users().iter().find(|u| u.matches(query))
    }
}

/// In-memory collection of repository entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.labels.push(Label::new(name));
        self
    }

    pub fn with_milestone(mut self, id: u64, title: impl Into<String>) -> Self {
        self.milestones.push(Milestone {
            id,
            title: title.into(),
            open: true,
        });
        self
    }

    pub fn with_user(mut self, login: impl Into<String>) -> Self {
        self.users.push(User {
            login: login.into(),
            name: None,
        });
        self
    }
}

impl Resolver for Model {
    fn labels(&self) -> &[Label] {
        &self.labels
    }

    fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    fn users(&self) -> &[User] {
        &self.users
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
