// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use hubq_core::{IssueState, QualifierApplicationError};
use yare::parameterized;

fn setup() -> TestContext {
    let mut ctx = TestContext::new();
    ctx.create_issue(1, "First");
    ctx.create_issue(2, "Second").labels = vec!["priority.low".into()];
    ctx
}

fn apply(ctx: &mut TestContext, expr: &str, ids: &[u64]) -> Result<String> {
    let mut out = Vec::new();
    run_impl(&mut ctx.snapshot, expr, ids, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_apply_sets_fields() {
    let mut ctx = setup();
    apply(
        &mut ctx,
        "label:bug assignee:alice milestone:v1 state:closed title:\"New title\"",
        &[1],
    )
    .unwrap();

    let issue = ctx.issue(1);
    assert_eq!(issue.labels, vec!["bug".to_string()]);
    assert_eq!(issue.assignee.as_deref(), Some("alice"));
    assert_eq!(issue.milestone, Some(1));
    assert_eq!(issue.state, IssueState::Closed);
    assert_eq!(issue.title, "New title");
}

#[test]
fn test_apply_to_several_issues() {
    let mut ctx = setup();
    let out = apply(&mut ctx, "label:bug", &[1, 2]).unwrap();
    assert!(ctx.issue(1).has_label("bug"));
    assert!(ctx.issue(2).has_label("bug"));
    assert_eq!(out, "Applied label:bug to #1\nApplied label:bug to #2\n");
}

#[test]
fn test_apply_exclusive_label_replaces_group() {
    let mut ctx = setup();
    apply(&mut ctx, "label:priority.high", &[2]).unwrap();
    assert_eq!(ctx.issue(2).labels, vec!["priority.high".to_string()]);
}

#[test]
fn test_apply_assignee_by_display_name() {
    let mut ctx = setup();
    apply(&mut ctx, "assignee:\"Alice Liddell\"", &[1]).unwrap();
    assert_eq!(ctx.issue(1).assignee.as_deref(), Some("alice"));
}

#[parameterized(
    disjunction = { "label:bug OR label:feature" },
    negation = { "NOT label:bug" },
    read_only = { "author:bob" },
    repeated_kind = { "assignee:alice assignee:bob" },
)]
fn test_not_applicable(expr: &str) {
    let mut ctx = setup();
    let before = ctx.snapshot.clone();
    let err = apply(&mut ctx, expr, &[1]).unwrap_err();
    assert!(matches!(err, Error::NotApplicable { .. }));
    assert_eq!(ctx.snapshot, before);
}

#[test]
fn test_unknown_issue_touches_nothing() {
    let mut ctx = setup();
    let before = ctx.snapshot.clone();
    let err = apply(&mut ctx, "label:bug", &[1, 99]).unwrap_err();
    assert!(matches!(err, Error::IssueNotFound(99)));
    assert_eq!(ctx.snapshot, before);
}

#[test]
fn test_partial_application_is_kept() {
    let mut ctx = setup();
    let err = apply(&mut ctx, "label:bug label:wontfix", &[1, 2]).unwrap_err();

    match err {
        Error::Apply { id, source } => {
            assert_eq!(id, 1);
            assert!(matches!(
                source,
                QualifierApplicationError::Unresolved { entity: "label", .. }
            ));
        }
        other => unreachable!("unexpected error: {other}"),
    }
    // The first qualifier took effect on #1; #2 was never reached
    assert!(ctx.issue(1).has_label("bug"));
    assert!(!ctx.issue(2).has_label("bug"));
}

#[test]
fn test_updated_at_bumped_only_on_change() {
    let mut ctx = setup();
    ctx.snapshot.issues[0].labels = vec!["bug".into()];
    let before = ctx.issue(1).updated_at;

    apply(&mut ctx, "label:bug", &[1]).unwrap();
    assert_eq!(ctx.issue(1).updated_at, before);

    apply(&mut ctx, "label:feature", &[1]).unwrap();
    assert!(ctx.issue(1).updated_at > before);
}
