// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expression types.
//!
//! A filter is a tree of qualifiers combined with `NOT`, `AND` and `OR`.
//! Trees are plain owned values: every transformation builds a new tree.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A parsed filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterExpression {
    /// A single typed predicate/mutation.
    Qualifier(Qualifier),
    /// Matches everything and applies nothing. Only produced by pruning.
    Empty,
    /// Logical complement.
    Not(Box<FilterExpression>),
    /// Both operands must hold.
    And(Box<FilterExpression>, Box<FilterExpression>),
    /// Either operand must hold.
    Or(Box<FilterExpression>, Box<FilterExpression>),
}

impl FilterExpression {
    /// Shorthand for a text-valued qualifier leaf.
    pub fn qualifier(kind: QualifierKind, text: impl Into<String>) -> Self {
        FilterExpression::Qualifier(Qualifier::text(kind, text))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: FilterExpression) -> Self {
        FilterExpression::Not(Box::new(inner))
    }

    pub fn and(left: FilterExpression, right: FilterExpression) -> Self {
        FilterExpression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: FilterExpression, right: FilterExpression) -> Self {
        FilterExpression::Or(Box::new(left), Box::new(right))
    }

    /// Returns true for the [`FilterExpression::Empty`] sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, FilterExpression::Empty)
    }
}

impl From<Qualifier> for FilterExpression {
    fn from(q: Qualifier) -> Self {
        FilterExpression::Qualifier(q)
    }
}

/// Canonical text form: `NOT e`, `(l r)` for `And`, `(l OR r)` for `Or`.
/// [`parse_filter`](super::parse_filter) reads it back to an equal tree.
///
/// # Note
///
/// `Empty` prints as nothing, so a pruned tree containing `Not(Empty)`
/// prints a dangling `NOT ` (e.g. `(label:bug NOT )`) and cannot be parsed
/// again.
impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::Qualifier(q) => write!(f, "{q}"),
            FilterExpression::Empty => Ok(()),
            FilterExpression::Not(inner) => write!(f, "NOT {inner}"),
            FilterExpression::And(l, r) => write!(f, "({l} {r})"),
            FilterExpression::Or(l, r) => write!(f, "({l} OR {r})"),
        }
    }
}

/// A leaf of the filter tree: a kind and the literal it matches or assigns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    pub kind: QualifierKind,
    pub value: QualifierValue,
}

impl Qualifier {
    pub fn new(kind: QualifierKind, value: QualifierValue) -> Self {
        Qualifier { kind, value }
    }

    pub fn text(kind: QualifierKind, text: impl Into<String>) -> Self {
        Qualifier::new(kind, QualifierValue::Text(text.into()))
    }

    /// The text literal, if this qualifier carries one.
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            QualifierValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.value) {
            (QualifierKind::Keyword, QualifierValue::Text(s)) => {
                if keyword_needs_quotes(s) {
                    write!(f, "\"{s}\"")
                } else {
                    write!(f, "{s}")
                }
            }
            (kind, value) => write!(f, "{kind}:{value}"),
        }
    }
}

/// Kinds of qualifier, each bound to one issue field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualifierKind {
    /// Issue number.
    Id,
    /// Free text searched in title and body. Written as a bare word.
    Keyword,
    Title,
    /// `desc` / `description` synonyms.
    Body,
    Milestone,
    Label,
    Assignee,
    /// `creator` synonym.
    Author,
    /// Author or assignee (`user` synonym).
    Involves,
    /// `status` synonym.
    State,
    /// Field is present: `has:label`, `has:milestone`, `has:assignee`.
    Has,
    /// Field is absent.
    No,
    /// Issue property: `is:open`, `is:pr`, `is:unlabeled`, ...
    Is,
    /// Creation date (`date` synonym).
    Created,
    Updated,
}

/// Type of literal a qualifier kind expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Text,
    Number,
    Date,
}

impl QualifierKind {
    /// Returns the canonical name used in filter text.
    pub fn as_str(&self) -> &'static str {
        match self {
            QualifierKind::Id => "id",
            QualifierKind::Keyword => "keyword",
            QualifierKind::Title => "title",
            QualifierKind::Body => "body",
            QualifierKind::Milestone => "milestone",
            QualifierKind::Label => "label",
            QualifierKind::Assignee => "assignee",
            QualifierKind::Author => "author",
            QualifierKind::Involves => "involves",
            QualifierKind::State => "state",
            QualifierKind::Has => "has",
            QualifierKind::No => "no",
            QualifierKind::Is => "is",
            QualifierKind::Created => "created",
            QualifierKind::Updated => "updated",
        }
    }

    /// Returns valid qualifier names for error messages.
    pub fn valid_names() -> &'static str {
        "id, keyword, title, body, milestone, label, assignee, author, involves, \
         state, has, no, is, created, updated"
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            QualifierKind::Id => ValueType::Number,
            QualifierKind::Created | QualifierKind::Updated => ValueType::Date,
            _ => ValueType::Text,
        }
    }

    /// Whether several qualifiers of this kind may be applied together.
    ///
    /// Only labels are cumulative; every other field holds one value.
    pub fn is_repeatable(&self) -> bool {
        matches!(self, QualifierKind::Label)
    }

    /// Whether qualifiers of this kind can modify an issue.
    pub fn is_mutable(&self) -> bool {
        matches!(
            self,
            QualifierKind::Title
                | QualifierKind::Milestone
                | QualifierKind::Label
                | QualifierKind::Assignee
                | QualifierKind::State
        )
    }
}

impl fmt::Display for QualifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QualifierKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "id" => Ok(QualifierKind::Id),
            "keyword" => Ok(QualifierKind::Keyword),
            "title" => Ok(QualifierKind::Title),
            "body" | "desc" | "description" => Ok(QualifierKind::Body),
            "milestone" => Ok(QualifierKind::Milestone),
            "label" => Ok(QualifierKind::Label),
            "assignee" => Ok(QualifierKind::Assignee),
            "author" | "creator" => Ok(QualifierKind::Author),
            "involves" | "user" => Ok(QualifierKind::Involves),
            "state" | "status" => Ok(QualifierKind::State),
            "has" => Ok(QualifierKind::Has),
            "no" => Ok(QualifierKind::No),
            "is" => Ok(QualifierKind::Is),
            "created" | "date" => Ok(QualifierKind::Created),
            "updated" => Ok(QualifierKind::Updated),
            _ => Err(Error::UnknownQualifier {
                name: s.to_string(),
            }),
        }
    }
}

/// Literal carried by a qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QualifierValue {
    Text(String),
    Number(Comparison<u64>),
    Date(Comparison<NaiveDate>),
}

impl fmt::Display for QualifierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualifierValue::Text(s) => {
                if text_needs_quotes(s) {
                    write!(f, "\"{s}\"")
                } else {
                    write!(f, "{s}")
                }
            }
            QualifierValue::Number(c) => write!(f, "{c}"),
            QualifierValue::Date(c) => write!(f, "{c}"),
        }
    }
}

/// Comparison operators embedded in number and date literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Plain literal (`5`).
    Eq,
    /// Less than (`<5`).
    Lt,
    /// Less than or equal (`<=5`).
    Le,
    /// Greater than (`>5`).
    Gt,
    /// Greater than or equal (`>=5`).
    Ge,
}

impl CompareOp {
    /// Returns the literal prefix for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// A comparison against a number or date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Comparison<T> {
    /// `op value`, e.g. `>=5`.
    Compare(CompareOp, T),
    /// Inclusive range `low..high`.
    Between(T, T),
}

impl<T: PartialOrd> Comparison<T> {
    /// Check whether `actual` satisfies this comparison.
    pub fn matches(&self, actual: &T) -> bool {
        match self {
            Comparison::Compare(op, expected) => match op {
                CompareOp::Eq => actual == expected,
                CompareOp::Lt => actual < expected,
                CompareOp::Le => actual <= expected,
                CompareOp::Gt => actual > expected,
                CompareOp::Ge => actual >= expected,
            },
            Comparison::Between(low, high) => low <= actual && actual <= high,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Comparison<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Compare(op, value) => write!(f, "{}{}", op.symbol(), value),
            Comparison::Between(low, high) => write!(f, "{low}..{high}"),
        }
    }
}

/// Characters that end an unquoted word.
pub(crate) fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')' || c == '"'
}

fn text_needs_quotes(s: &str) -> bool {
    s.is_empty() || s.chars().any(is_word_boundary)
}

/// Bare keywords must not read back as operators or qualifiers.
fn keyword_needs_quotes(s: &str) -> bool {
    text_needs_quotes(s)
        || s.contains(':')
        || s.starts_with(['-', '!', '|', '&'])
        || matches!(s, "AND" | "OR" | "NOT")
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
