// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hubqrs - query and edit issue snapshots with filter expressions.
//!
//! This crate provides the functionality behind the `hubq` CLI: locating
//! the `.hubq/` directory, reading and writing the JSON snapshot, and
//! routing commands to the [`hubq_core`] filter engine.
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration (snapshot location, output format)
//! - [`Snapshot`] - Issues plus the labels, milestones and users they refer to
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use hubqrs::{init_work_dir, Snapshot};
//!
//! let work_dir = init_work_dir(Path::new("."))?;
//! let snapshot = Snapshot::load(&work_dir.join("snapshot.json"))?;
//! ```

mod cli;
mod commands;
mod display;

pub mod config;
pub mod env;
pub mod error;
pub mod snapshot;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, get_snapshot_path, init_work_dir, Config, Context};
pub use error::{Error, Result};
pub use snapshot::Snapshot;

use clap::CommandFactory;
use clap_complete::generate;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let Cli { snapshot, command } = cli;
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::Query { expr, output } => commands::query::run(snapshot, &expr, output),
        Command::Apply { expr, ids } => commands::apply::run(snapshot, &expr, &ids),
        Command::Prune { expr, drop, keep } => commands::prune::run(&expr, &drop, &keep),
        Command::Check { expr } => commands::check::run(&expr),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "hubq", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
