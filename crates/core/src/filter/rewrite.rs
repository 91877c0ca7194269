// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural rewriting of filter trees.

use super::expr::{FilterExpression, Qualifier, QualifierKind};

impl FilterExpression {
    /// Keep only the qualifiers satisfying `pred`, collapsing what is left.
    ///
    /// A binary node whose operand prunes to [`FilterExpression::Empty`]
    /// is replaced by its other operand, for `Or` as well as `And`.
    /// `Not` keeps its shape, so a fully pruned negation is `Not(Empty)`.
    pub fn filter<P>(&self, pred: P) -> FilterExpression
    where
        P: Fn(&Qualifier) -> bool,
    {
        self.filter_by(&pred)
    }

    fn filter_by<P>(&self, pred: &P) -> FilterExpression
    where
        P: Fn(&Qualifier) -> bool,
    {
        match self {
            FilterExpression::Qualifier(q) => {
                if pred(q) {
                    self.clone()
                } else {
                    FilterExpression::Empty
                }
            }
            FilterExpression::Empty => FilterExpression::Empty,
            FilterExpression::Not(inner) => FilterExpression::not(inner.filter_by(pred)),
            FilterExpression::And(l, r) => {
                collapse(l.filter_by(pred), r.filter_by(pred), FilterExpression::and)
            }
            FilterExpression::Or(l, r) => {
                collapse(l.filter_by(pred), r.filter_by(pred), FilterExpression::or)
            }
        }
    }

    /// Remove every qualifier of `kind`.
    pub fn without_kind(&self, kind: QualifierKind) -> FilterExpression {
        self.filter(|q| q.kind != kind)
    }

    /// Keep only qualifiers whose kind is in `kinds`.
    pub fn only_kinds(&self, kinds: &[QualifierKind]) -> FilterExpression {
        self.filter(|q| kinds.contains(&q.kind))
    }
}

fn collapse(
    left: FilterExpression,
    right: FilterExpression,
    combine: fn(FilterExpression, FilterExpression) -> FilterExpression,
) -> FilterExpression {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right,
        (false, true) => left,
        (false, false) => combine(left, right),
    }
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
