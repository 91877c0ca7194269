// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::init_work_dir;
use crate::error::Result;

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let target = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    run_impl(&target, &mut std::io::stdout())
}

pub(crate) fn run_impl(target: &Path, out: &mut impl Write) -> Result<()> {
    let work_dir = init_work_dir(target)?;
    tracing::info!(path = %work_dir.display(), "initialized");
    writeln!(out, "Initialized hubq in {}", work_dir.display())?;
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
