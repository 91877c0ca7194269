// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use chrono::{TimeZone, Utc};
use hubq_core::{IssueState, Model};

fn create_test_issue(id: u64, title: &str) -> Issue {
    Issue::new(
        id,
        title.to_string(),
        "bob".to_string(),
        Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
    )
}

#[test]
fn test_format_issue_line() {
    let issue = create_test_issue(1, "Test issue");
    assert_eq!(
        format_issue_line(&issue, &Model::new()),
        "- [issue] (open) #1: Test issue"
    );
}

#[test]
fn test_format_issue_line_with_assignee_and_state() {
    let mut issue = create_test_issue(2, "Closed one");
    issue.assignee = Some("alice".into());
    issue.state = IssueState::Closed;
    assert_eq!(
        format_issue_line(&issue, &Model::new()),
        "- [issue] (closed, @alice) #2: Closed one"
    );
}

#[test]
fn test_format_pull_request() {
    let mut issue = create_test_issue(3, "Add feature");
    issue.pull_request = true;
    assert!(format_issue_line(&issue, &Model::new()).starts_with("- [pr] "));
}

#[test]
fn test_format_labels_and_milestone() {
    let mut issue = create_test_issue(4, "Crash");
    issue.labels = vec!["bug".into(), "priority.high".into()];
    issue.milestone = Some(2);
    let model = Model::new().with_milestone(2, "v2");
    assert_eq!(
        format_issue_line(&issue, &model),
        "- [issue] (open) #4: Crash  {bug, priority.high}  %v2"
    );
}

#[test]
fn test_format_unknown_milestone_shows_id() {
    let mut issue = create_test_issue(5, "Orphan");
    issue.milestone = Some(9);
    assert!(format_issue_line(&issue, &Model::new()).ends_with("  %9"));
}
