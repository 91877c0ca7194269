// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;

use hubq_core::parse_filter;

use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

use super::open_snapshot;

pub fn run(snapshot: Option<PathBuf>, expr: &str, ids: &[u64]) -> Result<()> {
    let (mut snapshot, ctx) = open_snapshot(snapshot)?;
    let result = run_impl(&mut snapshot, expr, ids, &mut std::io::stdout());

    // Mutations made before a failing qualifier are kept
    if matches!(result, Ok(()) | Err(Error::Apply { .. })) {
        snapshot.save(&ctx.snapshot_path)?;
    }
    result
}

/// Apply `expr` to each issue in `ids`, in order.
///
/// Every id is looked up before any issue is touched. Application stops at
/// the first failure; issues and qualifiers handled before it keep their
/// effect. `updated_at` is bumped on issues that actually changed.
pub(crate) fn run_impl(
    snapshot: &mut Snapshot,
    expr: &str,
    ids: &[u64],
    out: &mut impl Write,
) -> Result<()> {
    let filter = parse_filter(expr)?;
    if !filter.can_be_applied_to_issue() {
        return Err(Error::NotApplicable {
            expression: filter.to_string(),
        });
    }
    for &id in ids {
        snapshot.issue(id)?;
    }

    let Snapshot { model, issues } = snapshot;
    for &id in ids {
        let Some(issue) = issues.iter_mut().find(|i| i.id == id) else {
            return Err(Error::IssueNotFound(id));
        };
        let before = issue.clone();
        let result = filter.apply_to(issue, &*model);
        if *issue != before {
            issue.updated_at = Utc::now();
        }
        if let Err(source) = result {
            tracing::warn!(issue = id, error = %source, "apply failed");
            return Err(Error::Apply { id, source });
        }
        writeln!(out, "Applied {} to #{}", filter, id)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
