// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn hubq() -> Command {
    let mut cmd = cargo_bin_cmd!("hubq");
    cmd.env_remove("HUBQ_SNAPSHOT").env_remove("HUBQ_LOG");
    cmd
}

/// Snapshot with three issues and the entities they refer to.
pub const SAMPLE_SNAPSHOT: &str = r#"{
  "labels": [
    { "name": "bug" },
    { "name": "feature" },
    { "name": "priority.high" },
    { "name": "priority.low" }
  ],
  "milestones": [
    { "id": 1, "title": "v1" },
    { "id": 2, "title": "v2", "open": false }
  ],
  "users": [
    { "login": "alice", "name": "Alice Liddell" },
    { "login": "bob" }
  ],
  "issues": [
    {
      "id": 1,
      "title": "Crash on start",
      "body": "Segfault when the config is missing",
      "author": "bob",
      "labels": ["bug", "priority.low"],
      "created_at": "2024-01-05T10:00:00Z",
      "updated_at": "2024-01-05T10:00:00Z"
    },
    {
      "id": 2,
      "title": "Dark mode",
      "author": "alice",
      "assignee": "alice",
      "milestone": 2,
      "labels": ["feature"],
      "created_at": "2024-02-10T10:00:00Z",
      "updated_at": "2024-02-11T10:00:00Z"
    },
    {
      "id": 3,
      "title": "Fix typo",
      "state": "closed",
      "pull_request": true,
      "author": "bob",
      "created_at": "2024-03-01T10:00:00Z",
      "updated_at": "2024-03-02T10:00:00Z"
    }
  ]
}
"#;

/// Helper to create an initialized temp directory holding the sample snapshot
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    hubq()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    std::fs::write(snapshot_path(&temp), SAMPLE_SNAPSHOT).unwrap();
    temp
}

pub fn snapshot_path(temp: &TempDir) -> PathBuf {
    temp.path().join(".hubq/snapshot.json")
}

pub fn read_snapshot(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Ids of the issues a query prints in JSON form.
pub fn query_ids(temp: &TempDir, expr: &str) -> Vec<u64> {
    let output = hubq()
        .args(["query", expr, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "query failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_u64().unwrap())
        .collect()
}
