// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server state management.
//!
//! Wraps the canonical fine collection for thread-safe access.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use finetrack_core::{Fine, FinePatch};

/// Errors raised by state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("fine not found: {0}")]
    NotFound(String),

    #[error("fine already exists: {0}")]
    AlreadyExists(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shared server state containing the canonical fine collection.
#[derive(Clone)]
pub struct ServerState {
    inner: Arc<ServerStateInner>,
}

struct ServerStateInner {
    /// The collection, in insertion order.
    fines: Mutex<Vec<Fine>>,
    /// Where the collection is mirrored, if anywhere.
    data_file: Option<PathBuf>,
    /// Bearer token required on fines requests.
    api_key: Option<String>,
}

impl ServerState {
    /// Creates state backed by `data_file` when given, loading it if it exists.
    pub fn open(data_file: Option<&Path>, api_key: Option<String>) -> Result<Self, StateError> {
        let fines = match data_file {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)?;
                serde_json::from_str(&content)?
            }
            _ => Vec::new(),
        };

        Ok(ServerState {
            inner: Arc::new(ServerStateInner {
                fines: Mutex::new(fines),
                data_file: data_file.map(Path::to_path_buf),
                api_key,
            }),
        })
    }

    /// Creates empty state that is never written to disk.
    pub fn in_memory() -> Self {
        ServerState {
            inner: Arc::new(ServerStateInner {
                fines: Mutex::new(Vec::new()),
                data_file: None,
                api_key: None,
            }),
        }
    }

    /// Returns true if a request carrying `authorization` may proceed.
    pub fn authorize(&self, authorization: Option<&str>) -> bool {
        match &self.inner.api_key {
            None => true,
            Some(key) => authorization
                .and_then(|value| value.strip_prefix("Bearer "))
                .is_some_and(|token| token == key),
        }
    }

    /// Returns a snapshot of the collection.
    pub async fn list(&self) -> Vec<Fine> {
        self.inner.fines.lock().await.clone()
    }

    /// Appends a fine. Ids are assigned by clients and must be unique.
    pub async fn create(&self, fine: Fine) -> Result<Fine, StateError> {
        let mut fines = self.inner.fines.lock().await;
        if fines.iter().any(|f| f.id == fine.id) {
            return Err(StateError::AlreadyExists(fine.id));
        }

        let mut next = fines.clone();
        next.push(fine.clone());
        self.persist(&next)?;
        *fines = next;

        debug!(id = %fine.id, "created fine");
        Ok(fine)
    }

    /// Merges `patch` into the fine with `id`.
    pub async fn update(&self, id: &str, patch: &FinePatch) -> Result<Fine, StateError> {
        let mut fines = self.inner.fines.lock().await;
        let mut next = fines.clone();
        let fine = next
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| StateError::NotFound(id.to_string()))?;
        patch.apply(fine);
        let updated = fine.clone();

        self.persist(&next)?;
        *fines = next;

        debug!(id = %id, "updated fine");
        Ok(updated)
    }

    /// Removes the fine with `id`.
    pub async fn delete(&self, id: &str) -> Result<(), StateError> {
        let mut fines = self.inner.fines.lock().await;
        if !fines.iter().any(|f| f.id == id) {
            return Err(StateError::NotFound(id.to_string()));
        }

        let next: Vec<Fine> = fines.iter().filter(|f| f.id != id).cloned().collect();
        self.persist(&next)?;
        *fines = next;

        debug!(id = %id, "deleted fine");
        Ok(())
    }

    /// Rewrites the data file via a sibling temp file and rename.
    fn persist(&self, fines: &[Fine]) -> Result<(), StateError> {
        let Some(path) = &self.inner.data_file else {
            return Ok(());
        };

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(fines)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
