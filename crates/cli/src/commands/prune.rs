// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hubq_core::{parse_filter, QualifierKind};

use crate::error::{Error, Result};

pub fn run(expr: &str, drop: &[QualifierKind], keep: &[QualifierKind]) -> Result<()> {
    run_impl(expr, drop, keep, &mut std::io::stdout())
}

/// Print `expr` with the qualifiers of the `drop` kinds removed, or with
/// only the `keep` kinds left. `keep` wins when both are given.
pub(crate) fn run_impl(
    expr: &str,
    drop: &[QualifierKind],
    keep: &[QualifierKind],
    out: &mut impl Write,
) -> Result<()> {
    let filter = parse_filter(expr)?;
    let pruned = match (drop.is_empty(), keep.is_empty()) {
        (true, true) => return Err(Error::PruneKindsRequired),
        (_, false) => filter.only_kinds(keep),
        (false, true) => filter.filter(|q| !drop.contains(&q.kind)),
    };

    if pruned.is_empty() {
        writeln!(out, "(empty)")?;
    } else {
        writeln!(out, "{}", pruned)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "prune_tests.rs"]
mod tests;
