// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! An opened data directory: config plus the process lock that serializes
//! finetrack invocations sharing it.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use tracing::debug;

use crate::config::{get_db_path, get_lock_path, Config};
use crate::error::Result;
use crate::mode::StorageMode;
use crate::service::FineService;
use crate::storage::{KeyValueStore, MemoryKv, SqliteKv};

pub struct Workspace {
    pub data_dir: PathBuf,
    pub config: Config,
    _lock: File,
}

impl Workspace {
    /// Load the config and take the data directory lock.
    ///
    /// Blocks while another finetrack process holds the lock.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let lock = acquire_lock(&get_lock_path(data_dir))?;
        debug!(dir = %data_dir.display(), mode = %config.mode, "opened data directory");
        Ok(Workspace {
            data_dir: data_dir.to_path_buf(),
            config,
            _lock: lock,
        })
    }

    /// Build the service for the configured mode.
    ///
    /// Remote mode keeps nothing on disk, so no database file is created.
    pub fn service(&self) -> Result<FineService> {
        let kv: Arc<dyn KeyValueStore> = match self.config.mode {
            StorageMode::Remote => Arc::new(MemoryKv::new()),
            StorageMode::Local | StorageMode::Hybrid => {
                Arc::new(SqliteKv::open(&get_db_path(&self.data_dir))?)
            }
        };
        FineService::from_config(&self.config, kv)
    }
}

fn acquire_lock(lock_path: &Path) -> Result<File> {
    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(lock_path)?;
    file.lock_exclusive()?;
    Ok(file)
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
