// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::config::Config;
use crate::error::Error;
use crate::snapshot::Snapshot;
use tempfile::TempDir;

#[test]
fn test_init_creates_config_and_snapshot() {
    let temp = TempDir::new().unwrap();
    let mut out = Vec::new();
    run_impl(temp.path(), &mut out).unwrap();

    let work_dir = temp.path().join(".hubq");
    assert_eq!(Config::load(&work_dir).unwrap(), Config::default());
    assert_eq!(
        Snapshot::load(&work_dir.join("snapshot.json")).unwrap(),
        Snapshot::default()
    );
    assert!(String::from_utf8(out).unwrap().starts_with("Initialized hubq in "));
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path(), &mut Vec::new()).unwrap();
    let err = run_impl(temp.path(), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized(_)));
}
