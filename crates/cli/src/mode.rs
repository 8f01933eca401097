// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Storage mode selection.
//!
//! Decides where fines live: only on this machine, only on the remote
//! service, or locally with the remote kept in step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Where fines are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Local store only, no network.
    #[default]
    Local,
    /// Remote service only, nothing kept locally.
    #[serde(alias = "database")]
    #[value(alias = "database")]
    Remote,
    /// Local store with queued sync to the remote service.
    Hybrid,
}

impl StorageMode {
    /// Returns true if this mode talks to the remote service.
    pub fn uses_remote(&self) -> bool {
        !matches!(self, StorageMode::Local)
    }

    /// Returns true if this mode keeps a local copy.
    pub fn uses_local(&self) -> bool {
        !matches!(self, StorageMode::Remote)
    }

    /// Returns true if this mode has queued mutations to reconcile.
    pub fn supports_sync(&self) -> bool {
        matches!(self, StorageMode::Hybrid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Local => "local",
            StorageMode::Remote => "remote",
            StorageMode::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "local" => Ok(StorageMode::Local),
            "remote" | "database" => Ok(StorageMode::Remote),
            "hybrid" => Ok(StorageMode::Hybrid),
            _ => Err(Error::Config(format!(
                "unknown storage mode '{}'\n  hint: valid modes are: local, remote, hybrid",
                s
            ))),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
