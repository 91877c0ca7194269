// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.hubq/config.toml` and includes:
//! - `snapshot`: path to the issue snapshot (relative to `.hubq/` unless absolute)
//! - `format`: default output format for `hubq query`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::env;
use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

const WORK_DIR_NAME: &str = ".hubq";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_SNAPSHOT: &str = "snapshot.json";

/// Project configuration stored in `.hubq/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file path.
    #[serde(default = "default_snapshot")]
    pub snapshot: String,
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_snapshot() -> String {
    DEFAULT_SNAPSHOT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot: default_snapshot(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.hubq/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.hubq/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .hubq directory by walking up from `start`.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Find the .hubq directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Get the snapshot path from config.
pub fn get_snapshot_path(work_dir: &Path, config: &Config) -> PathBuf {
    let snapshot = Path::new(&config.snapshot);
    if snapshot.is_absolute() {
        snapshot.to_path_buf()
    } else {
        work_dir.join(snapshot)
    }
}

/// Initialize a new .hubq directory with a default config and an empty snapshot.
pub fn init_work_dir(path: &Path) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;

    let config = Config::default();
    config.save(&work_dir)?;
    Snapshot::default().save(&get_snapshot_path(&work_dir, &config))?;

    Ok(work_dir)
}

/// Where a command reads its data from.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub snapshot_path: PathBuf,
}

impl Context {
    /// Resolve the snapshot path and config.
    ///
    /// Precedence: the `--snapshot` flag, then `HUBQ_SNAPSHOT`, then the
    /// `snapshot` key of the nearest `.hubq/config.toml`. Config is loaded
    /// when a `.hubq/` directory exists, even if the path is overridden.
    pub fn resolve(flag: Option<PathBuf>) -> Result<Self> {
        let override_path = flag.or_else(env::snapshot_path);
        let work_dir = find_work_dir().ok();
        let config = match &work_dir {
            Some(dir) => Config::load(dir)?,
            None => Config::default(),
        };

        let snapshot_path = match (override_path, &work_dir) {
            (Some(path), _) => path,
            (None, Some(dir)) => get_snapshot_path(dir, &config),
            (None, None) => return Err(Error::NotInitialized),
        };
        tracing::debug!(path = %snapshot_path.display(), "resolved snapshot");

        Ok(Context {
            config,
            snapshot_path,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
