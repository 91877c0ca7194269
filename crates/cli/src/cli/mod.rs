// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use hubq_core::QualifierKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parse a qualifier kind name or alias for `--drop`/`--keep`.
fn parse_kind(s: &str) -> Result<QualifierKind, String> {
    s.parse::<QualifierKind>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "hubq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query and edit issue snapshots with filter expressions")]
#[command(long_about = "Query and edit issue snapshots with filter expressions.\n\n\
    The same expression selects issues (query) and sets their fields (apply).")]
#[command(after_help = "\
Expressions:
  label:bug assignee:alice       AND by juxtaposition
  milestone:v1 OR milestone:v2   either milestone
  NOT is:closed                  negation (also ! or -)
  id:>100 created:>=2024-01-01   comparisons and ranges (a..b)
  crash                          keyword in title or body")]
pub struct Cli {
    /// Snapshot file to use instead of the configured one
    #[arg(long, global = true, value_name = "path")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a .hubq directory with a config and an empty snapshot
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<PathBuf>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Expressions
    // ─────────────────────────────────────────────────────────────────────────
    /// List issues matching an expression
    #[command(after_help = "Examples:\n  \
        hubq query 'label:bug is:open'           Open bugs\n  \
        hubq query 'assignee:alice' -o json      Alice's issues as JSON\n  \
        hubq query 'label:priority. NOT no:milestone'")]
    Query {
        /// Filter expression
        expr: String,

        /// Output format (default from config)
        #[arg(long = "output", short = 'o', value_enum)]
        output: Option<OutputFormat>,
    },

    /// Set the fields an expression names on one or more issues
    #[command(after_help = "Examples:\n  \
        hubq apply 'label:bug assignee:alice' 12 14\n  \
        hubq apply 'state:closed milestone:v2' 7")]
    Apply {
        /// Filter expression (title, milestone, label, assignee, state)
        expr: String,

        /// Issue numbers
        #[arg(required = true)]
        ids: Vec<u64>,
    },

    /// Remove qualifiers from an expression by kind
    #[command(after_help = "Examples:\n  \
        hubq prune 'label:bug is:open' --drop is\n  \
        hubq prune 'label:bug OR author:bob' --keep label")]
    Prune {
        /// Filter expression
        expr: String,

        /// Qualifier kinds to remove
        #[arg(long, value_parser = parse_kind, conflicts_with = "keep", required_unless_present = "keep")]
        drop: Vec<QualifierKind>,

        /// Qualifier kinds to keep
        #[arg(long, value_parser = parse_kind)]
        keep: Vec<QualifierKind>,
    },

    /// Show how an expression parses and whether it can be applied
    Check {
        /// Filter expression
        expr: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
