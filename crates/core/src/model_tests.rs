// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn model() -> Model {
    Model::new()
        .with_label("bug")
        .with_label("priority.high")
        .with_milestone(1, "v1.0")
        .with_milestone(2, "v2.0")
        .with_user("alice")
}

#[test]
fn find_label_ignores_case() {
    let m = model();
    assert_eq!(m.find_label("BUG").unwrap().name, "bug");
    assert!(m.find_label("ui").is_none());
}

#[test]
fn find_milestone_by_title_and_id() {
    let m = model();
    assert_eq!(m.find_milestone("V2.0").unwrap().id, 2);
    assert_eq!(m.milestone_by_id(1).unwrap().title, "v1.0");
    assert!(m.milestone_by_id(9).is_none());
}

#[test]
fn find_user_by_display_name() {
    let mut m = model();
    m.users.push(User {
        login: "bob".into(),
        name: Some("Robert".into()),
    });
    assert_eq!(m.find_user("robert").unwrap().login, "bob");
    assert!(m.find_user("carol").is_none());
}

#[test]
fn model_deserializes_missing_sections_as_empty() {
    let m: Model = serde_json::from_str(r#"{"labels": [{"name": "bug"}]}"#).unwrap();
    assert_eq!(m.labels.len(), 1);
    assert!(m.milestones.is_empty());
    assert!(m.users.is_empty());
}
