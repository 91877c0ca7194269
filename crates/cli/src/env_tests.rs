// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::HUBQ_LOG, "HUBQ_LOG");
    assert_eq!(vars::HUBQ_SNAPSHOT, "HUBQ_SNAPSHOT");
}

#[test]
fn test_snapshot_path_set_and_empty() {
    std::env::set_var("HUBQ_SNAPSHOT", "/tmp/issues.json");
    assert_eq!(snapshot_path(), Some(PathBuf::from("/tmp/issues.json")));

    std::env::set_var("HUBQ_SNAPSHOT", "");
    assert_eq!(snapshot_path(), None);

    std::env::remove_var("HUBQ_SNAPSHOT");
    assert_eq!(snapshot_path(), None);
}

#[test]
fn test_log_filter_set() {
    std::env::set_var("HUBQ_LOG", "debug");
    assert_eq!(log_filter().as_deref(), Some("debug"));
    std::env::remove_var("HUBQ_LOG");
}
