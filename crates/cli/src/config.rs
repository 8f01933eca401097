// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Data directory configuration management.
//!
//! Configuration is stored in `<data-dir>/config.toml` and includes:
//! - `mode`: where fines are persisted (local, remote, hybrid)
//! - `[remote]`: the fine service to talk to in remote and hybrid modes

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};
use crate::mode::StorageMode;

const DATA_DIR_NAME: &str = "finetrack";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "finetrack.db";
const LOCK_FILE_NAME: &str = "finetrack.lock";

/// Default per-request timeout for the remote service.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration stored in `<data-dir>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Storage mode (default: local).
    #[serde(default)]
    pub mode: StorageMode,
    /// Remote service (required for remote and hybrid modes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

/// Remote fine service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the service, `http://` or `https://`.
    pub url: String,
    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl RemoteConfig {
    /// Creates a remote config with default timeout and no API key.
    pub fn new(url: impl Into<String>) -> Self {
        RemoteConfig {
            url: url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the URL scheme and timeout.
    pub fn validate(&self) -> Result<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "invalid remote URL '{}': must be http:// or https://",
                self.url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config(
                "remote timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a non-local mode lacks a valid remote.
    pub fn new(mode: StorageMode, remote: Option<RemoteConfig>) -> Result<Self> {
        let config = Config { mode, remote };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the remote section fits the mode.
    pub fn validate(&self) -> Result<()> {
        if let Some(remote) = &self.remote {
            remote.validate()?;
        }
        if self.mode.uses_remote() && self.remote.is_none() {
            return Err(Error::Config(format!(
                "{} mode requires a [remote] section\n  hint: run 'finetrack init --mode {} --url <url>'",
                self.mode, self.mode
            )));
        }
        Ok(())
    }

    /// Returns the remote section, failing if there is none.
    pub fn remote_config(&self) -> Result<&RemoteConfig> {
        self.remote
            .as_ref()
            .ok_or_else(|| Error::Config(format!("{} mode requires a [remote] section", self.mode)))
    }

    /// Returns the remote URL if configured.
    pub fn remote_url(&self) -> Option<&str> {
        self.remote.as_ref().map(|r| r.url.as_str())
    }

    /// Loads configuration from the given data directory.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        if !config_path.is_file() {
            return Err(Error::NotInitialized(data_dir.display().to_string()));
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the given data directory.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Resolve the data directory: explicit flag, then `FINETRACK_DIR`, then
/// the platform data directory.
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = env::data_dir() {
        return dir;
    }
    default_data_dir()
}

/// Platform data directory for finetrack (e.g. `~/.local/share/finetrack`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Get the database path inside a data directory.
pub fn get_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE_NAME)
}

/// Get the advisory lock path inside a data directory.
pub fn get_lock_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOCK_FILE_NAME)
}

/// Initialize a data directory with the given configuration.
pub fn init_data_dir(data_dir: &Path, config: &Config) -> Result<()> {
    if data_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(data_dir.display().to_string()));
    }

    config.validate()?;
    fs::create_dir_all(data_dir)?;
    config.save(data_dir)?;

    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
