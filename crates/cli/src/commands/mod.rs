// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod apply;
pub mod check;
pub mod init;
pub mod prune;
pub mod query;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use crate::config::Context;
use crate::error::Result;
use crate::snapshot::Snapshot;

/// Helper to open the snapshot for the current context.
pub fn open_snapshot(flag: Option<PathBuf>) -> Result<(Snapshot, Context)> {
    let ctx = Context::resolve(flag)?;
    let snapshot = Snapshot::load(&ctx.snapshot_path)?;
    Ok((snapshot, ctx))
}
