// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

fn sample() -> Snapshot {
    let created = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    let mut issue = Issue::new(7, "Crash on start".into(), "bob".into(), created);
    issue.labels.push("bug".into());
    Snapshot {
        model: Model::new().with_label("bug").with_milestone(1, "v1").with_user("alice"),
        issues: vec![issue],
    }
}

#[test]
fn test_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("snapshot.json");
    let snapshot = sample();

    snapshot.save(&path).unwrap();
    let loaded = Snapshot::load(&path).unwrap();
    similar_asserts::assert_eq!(loaded, snapshot);
}

#[test]
fn test_entities_are_top_level_keys() {
    let json = serde_json::to_value(sample()).unwrap();
    assert!(json.get("labels").is_some());
    assert!(json.get("milestones").is_some());
    assert!(json.get("users").is_some());
    assert!(json.get("issues").is_some());
    assert!(json.get("model").is_none());
}

#[test]
fn test_missing_arrays_default_to_empty() {
    let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
    assert_eq!(snapshot, Snapshot::default());
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Snapshot::load(&temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Snapshot { .. }));
}

#[test]
fn test_load_malformed_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    let err = Snapshot::load(&path).unwrap_err();
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_issue_lookup() {
    let mut snapshot = sample();
    assert_eq!(snapshot.issue(7).unwrap().title, "Crash on start");
    assert!(matches!(snapshot.issue(8), Err(Error::IssueNotFound(8))));

    snapshot.issue_mut(7).unwrap().title = "Renamed".into();
    assert_eq!(snapshot.issue(7).unwrap().title, "Renamed");
}
