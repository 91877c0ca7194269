// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use hubq_core::{parse_filter, Issue};

use crate::cli::OutputFormat;
use crate::display::format_issue_line;
use crate::error::Result;
use crate::snapshot::Snapshot;

use super::open_snapshot;

/// JSON output structure for the query command.
#[derive(Serialize)]
struct QueryOutputJson<'a> {
    expression: String,
    issues: Vec<&'a Issue>,
}

pub fn run(snapshot: Option<PathBuf>, expr: &str, output: Option<OutputFormat>) -> Result<()> {
    let (snapshot, ctx) = open_snapshot(snapshot)?;
    let format = output.unwrap_or(ctx.config.format);
    run_impl(&snapshot, expr, format, &mut std::io::stdout())
}

/// Write the issues satisfying `expr`, in snapshot order.
pub(crate) fn run_impl(
    snapshot: &Snapshot,
    expr: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let filter = parse_filter(expr)?;
    let matches: Vec<&Issue> = snapshot
        .issues
        .iter()
        .filter(|issue| filter.is_satisfied_by(issue, &snapshot.model))
        .collect();
    tracing::debug!(
        expression = %filter,
        total = snapshot.issues.len(),
        matched = matches.len(),
        "query"
    );

    match format {
        OutputFormat::Text => {
            for issue in &matches {
                writeln!(out, "{}", format_issue_line(issue, &snapshot.model))?;
            }
        }
        OutputFormat::Json => {
            let output = QueryOutputJson {
                expression: filter.to_string(),
                issues: matches,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
