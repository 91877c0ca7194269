// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Default log filter when `HUBQ_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the value of `HUBQ_LOG` if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::HUBQ_LOG).ok()
}

/// Returns the value of `HUBQ_SNAPSHOT` if set and non-empty.
pub fn snapshot_path() -> Option<PathBuf> {
    std::env::var(vars::HUBQ_SNAPSHOT)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
