// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Applying filter expressions to issues as mutations.
//!
//! Only conjunctions of mutable qualifiers describe a sound edit. Callers
//! check [`FilterExpression::can_be_applied_to_issue`] before calling
//! [`FilterExpression::apply_to`]; without that check it is unspecified
//! which of two conflicting qualifiers wins.

use std::collections::HashSet;

use crate::error::QualifierApplicationError;
use crate::issue::{eq_ignore_case, exclusive_group, Issue, IssueState, Label};
use crate::model::Resolver;

use super::expr::{FilterExpression, Qualifier, QualifierKind};

type ApplyResult = std::result::Result<(), QualifierApplicationError>;

impl FilterExpression {
    /// Kinds of every qualifier in the tree, in traversal order.
    pub fn qualifier_names(&self) -> Vec<QualifierKind> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, names: &mut Vec<QualifierKind>) {
        match self {
            FilterExpression::Qualifier(q) => names.push(q.kind),
            FilterExpression::Empty => {}
            FilterExpression::Not(inner) => inner.collect_names(names),
            FilterExpression::And(l, r) | FilterExpression::Or(l, r) => {
                l.collect_names(names);
                r.collect_names(names);
            }
        }
    }

    /// Returns true if this tree can be applied to an issue as an edit.
    pub fn can_be_applied_to_issue(&self) -> bool {
        match self {
            FilterExpression::Qualifier(q) => q.kind.is_mutable(),
            FilterExpression::Empty => true,
            FilterExpression::Not(_) | FilterExpression::Or(..) => false,
            FilterExpression::And(l, r) => {
                !has_conflicting_kinds(&self.qualifier_names())
                    && l.can_be_applied_to_issue()
                    && r.can_be_applied_to_issue()
            }
        }
    }

    /// Apply every qualifier to `issue`, depth-first and left to right.
    ///
    /// Stops at the first failing qualifier. Mutations made before the
    /// failure are kept.
    ///
    /// # Errors
    ///
    /// Returns [`QualifierApplicationError`] if a referenced label,
    /// milestone or user does not exist in `model`, if a value is invalid
    /// for its kind, or if the tree contains a query-only node.
    pub fn apply_to<R: Resolver + ?Sized>(&self, issue: &mut Issue, model: &R) -> ApplyResult {
        match self {
            FilterExpression::Qualifier(q) => q.apply_to(issue, model),
            FilterExpression::Empty => Ok(()),
            FilterExpression::Not(_) => Err(QualifierApplicationError::Unsupported {
                operator: "negated",
            }),
            FilterExpression::Or(..) => Err(QualifierApplicationError::Unsupported {
                operator: "disjunctive",
            }),
            FilterExpression::And(l, r) => {
                l.apply_to(issue, model)?;
                r.apply_to(issue, model)
            }
        }
    }
}

/// Returns true if a non-repeatable kind occurs more than once.
pub fn has_conflicting_kinds(names: &[QualifierKind]) -> bool {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|kind| !kind.is_repeatable())
        .any(|kind| !seen.insert(*kind))
}

impl Qualifier {
    /// Apply this qualifier's mutation to `issue`.
    ///
    /// # Errors
    ///
    /// See [`FilterExpression::apply_to`].
    pub fn apply_to<R: Resolver + ?Sized>(&self, issue: &mut Issue, model: &R) -> ApplyResult {
        if !self.kind.is_mutable() {
            return Err(QualifierApplicationError::ReadOnly {
                qualifier: self.clone(),
            });
        }
        let Some(text) = self.as_text() else {
            return Err(self.rejected("expected a text value"));
        };

        tracing::debug!(issue = issue.id, qualifier = %self, "applying qualifier");

        match self.kind {
            QualifierKind::Title => {
                if text.trim().is_empty() {
                    return Err(self.rejected("title cannot be empty"));
                }
                issue.title = text.to_string();
            }
            QualifierKind::Milestone => {
                let milestone = model
                    .find_milestone(text)
                    .ok_or_else(|| self.unresolved("milestone", text))?;
                issue.milestone = Some(milestone.id);
            }
            QualifierKind::Label => {
                let label = model
                    .find_label(text)
                    .ok_or_else(|| self.unresolved("label", text))?;
                attach_label(issue, label);
            }
            QualifierKind::Assignee => {
                let user = model
                    .find_user(text)
                    .ok_or_else(|| self.unresolved("user", text))?;
                issue.assignee = Some(user.login.clone());
            }
            QualifierKind::State => {
                issue.state = text
                    .parse::<IssueState>()
                    .map_err(|_| self.rejected("state must be open or closed"))?;
            }
            _ => {
                return Err(QualifierApplicationError::ReadOnly {
                    qualifier: self.clone(),
                })
            }
        }
        Ok(())
    }

    fn unresolved(&self, entity: &'static str, name: &str) -> QualifierApplicationError {
        QualifierApplicationError::Unresolved {
            qualifier: self.clone(),
            entity,
            name: name.to_string(),
        }
    }

    fn rejected(&self, reason: &str) -> QualifierApplicationError {
        QualifierApplicationError::Rejected {
            qualifier: self.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Attach a label, replacing other labels of its exclusive group.
fn attach_label(issue: &mut Issue, label: &Label) {
    if issue.has_label(&label.name) {
        return;
    }
    if let Some(group) = exclusive_group(&label.name) {
        issue.labels.retain(|existing| {
            !exclusive_group(existing).is_some_and(|g| eq_ignore_case(g, group))
        });
    }
    issue.labels.push(label.name.clone());
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
