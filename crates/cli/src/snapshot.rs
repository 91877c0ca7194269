// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk issue snapshot.
//!
//! A snapshot is a single JSON document holding the repository entities
//! (labels, milestones, users) next to the issues that refer to them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use hubq_core::{Issue, Model};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub model: Model,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Snapshot {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| Error::Snapshot {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(
            path = %path.display(),
            issues = snapshot.issues.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content)?;
        Ok(())
    }

    pub fn issue(&self, id: u64) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|i| i.id == id)
            .ok_or(Error::IssueNotFound(id))
    }

    pub fn issue_mut(&mut self, id: u64) -> Result<&mut Issue> {
        self.issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(Error::IssueNotFound(id))
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
