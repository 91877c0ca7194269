// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of filter expressions against issues.
//!
//! Evaluation never fails. A reference that cannot be resolved (an unknown
//! milestone id, a value of the wrong type) simply does not match.

use crate::issue::{eq_ignore_case, split_label, Issue, IssueState};
use crate::model::Resolver;

use super::expr::{FilterExpression, Qualifier, QualifierKind, QualifierValue};

impl FilterExpression {
    /// Evaluate this filter against an issue.
    ///
    /// `model` resolves relational qualifiers such as `milestone:` that
    /// compare by name against entities the issue refers to by id.
    pub fn is_satisfied_by<R: Resolver + ?Sized>(&self, issue: &Issue, model: &R) -> bool {
        match self {
            FilterExpression::Qualifier(q) => q.is_satisfied_by(issue, model),
            FilterExpression::Empty => true,
            FilterExpression::Not(inner) => !inner.is_satisfied_by(issue, model),
            FilterExpression::And(l, r) => {
                l.is_satisfied_by(issue, model) && r.is_satisfied_by(issue, model)
            }
            FilterExpression::Or(l, r) => {
                l.is_satisfied_by(issue, model) || r.is_satisfied_by(issue, model)
            }
        }
    }
}

impl Qualifier {
    /// Evaluate a single qualifier against an issue.
    pub fn is_satisfied_by<R: Resolver + ?Sized>(&self, issue: &Issue, model: &R) -> bool {
        match (&self.kind, &self.value) {
            (QualifierKind::Id, QualifierValue::Number(cmp)) => cmp.matches(&issue.id),
            (QualifierKind::Created, QualifierValue::Date(cmp)) => {
                cmp.matches(&issue.created_at.date_naive())
            }
            (QualifierKind::Updated, QualifierValue::Date(cmp)) => {
                cmp.matches(&issue.updated_at.date_naive())
            }
            (kind, QualifierValue::Text(text)) => matches_text(*kind, text, issue, model),
            _ => false,
        }
    }
}

fn matches_text<R: Resolver + ?Sized>(
    kind: QualifierKind,
    text: &str,
    issue: &Issue,
    model: &R,
) -> bool {
    match kind {
        QualifierKind::Keyword => contains(&issue.title, text) || contains(&issue.body, text),
        QualifierKind::Title => contains(&issue.title, text),
        QualifierKind::Body => contains(&issue.body, text),
        QualifierKind::Milestone => issue
            .milestone
            .and_then(|id| model.milestone_by_id(id))
            .is_some_and(|m| eq_ignore_case(&m.title, text)),
        QualifierKind::Label => issue.labels.iter().any(|l| label_matches(text, l)),
        QualifierKind::Assignee => issue
            .assignee
            .as_deref()
            .is_some_and(|login| user_matches(model, login, text)),
        QualifierKind::Author => user_matches(model, &issue.author, text),
        QualifierKind::Involves => {
            user_matches(model, &issue.author, text)
                || issue
                    .assignee
                    .as_deref()
                    .is_some_and(|login| user_matches(model, login, text))
        }
        QualifierKind::State => text
            .parse::<IssueState>()
            .is_ok_and(|state| issue.state == state),
        QualifierKind::Has => field_present(issue, text).unwrap_or(false),
        QualifierKind::No => field_present(issue, text).is_some_and(|present| !present),
        QualifierKind::Is => matches_property(issue, text),
        QualifierKind::Id | QualifierKind::Created | QualifierKind::Updated => false,
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Match a label query against one attached label name.
///
/// `group.` matches any label of the group, `group.name` requires both
/// parts, and a bare name matches the full label name or its name part.
fn label_matches(query: &str, label: &str) -> bool {
    let (label_group, label_name) = split_label(label);
    match split_label(query) {
        (Some(group), name) => {
            label_group.is_some_and(|g| eq_ignore_case(g, group))
                && (name.is_empty() || eq_ignore_case(label_name, name))
        }
        (None, name) => eq_ignore_case(label, name) || eq_ignore_case(label_name, name),
    }
}

/// Compare a stored login against a query by login, then by display name.
fn user_matches<R: Resolver + ?Sized>(model: &R, login: &str, query: &str) -> bool {
    eq_ignore_case(login, query)
        || model
            .users()
            .iter()
            .find(|u| eq_ignore_case(&u.login, login))
            .is_some_and(|u| u.matches(query))
}

/// Presence of an optional field, or `None` for an unknown field name.
fn field_present(issue: &Issue, field: &str) -> Option<bool> {
    match field.to_lowercase().as_str() {
        "label" | "labels" => Some(!issue.labels.is_empty()),
        "milestone" | "milestones" => Some(issue.milestone.is_some()),
        "assignee" | "assignees" => Some(issue.assignee.is_some()),
        _ => None,
    }
}

fn matches_property(issue: &Issue, property: &str) -> bool {
    match property.to_lowercase().as_str() {
        "open" => issue.state == IssueState::Open,
        "closed" => issue.state == IssueState::Closed,
        "pr" | "pullrequest" => issue.pull_request,
        "issue" => !issue.pull_request,
        "labeled" | "labelled" => !issue.labels.is_empty(),
        "unlabeled" | "unlabelled" => issue.labels.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
