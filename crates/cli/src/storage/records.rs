// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record store: the full fine collection under a single key.
//!
//! Every mutation is a read-modify-write of the whole collection. The
//! read-modify-write is serialized by an internal mutex so that callers
//! sharing a store never lose an update.

use std::sync::{Arc, Mutex, MutexGuard};

use finetrack_core::{Fine, FinePatch};
use tracing::{debug, warn};

use super::kv::KeyValueStore;
use super::StorageResult;
use crate::error::{Error, Result};

/// Key holding the JSON array of fines.
pub const FINES_KEY: &str = "finetrack-fines";

/// Durable local storage of the fine collection.
pub struct RecordStore {
    kv: Arc<dyn KeyValueStore>,
    lock: Mutex<()>,
}

impl RecordStore {
    /// Create a record store over the given backend.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        RecordStore {
            kv,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Load every stored fine.
    ///
    /// Missing or unreadable data is treated as an empty collection.
    pub fn load(&self) -> Vec<Fine> {
        let _guard = self.guard();
        self.read().unwrap_or_else(|e| {
            warn!(error = %e, "failed to read stored fines, treating as empty");
            Vec::new()
        })
    }

    /// Overwrite the stored collection.
    pub fn save_all(&self, fines: &[Fine]) -> StorageResult<()> {
        let _guard = self.guard();
        self.write(fines)
    }

    /// Find a fine by id.
    pub fn get(&self, id: &str) -> Option<Fine> {
        self.load().into_iter().find(|fine| fine.id == id)
    }

    /// Returns true if a fine with this id is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append a fine and persist.
    ///
    /// Id uniqueness is the caller's responsibility.
    pub fn add(&self, fine: Fine) -> StorageResult<Fine> {
        let _guard = self.guard();
        let mut fines = self.read()?;
        fines.push(fine.clone());
        self.write(&fines)?;
        debug!(id = %fine.id, "stored fine");
        Ok(fine)
    }

    /// Merge `patch` into the fine with the given id.
    ///
    /// Fails with [`Error::FineNotFound`] and leaves storage untouched when
    /// the id is absent.
    pub fn update(&self, id: &str, patch: &FinePatch) -> Result<Fine> {
        let _guard = self.guard();
        let mut fines = self.read()?;
        let fine = fines
            .iter_mut()
            .find(|fine| fine.id == id)
            .ok_or_else(|| Error::FineNotFound(id.to_string()))?;
        patch.apply(fine);
        let updated = fine.clone();
        self.write(&fines)?;
        debug!(id, "updated fine");
        Ok(updated)
    }

    /// Remove the fine with the given id.
    ///
    /// Returns whether a fine was removed; an unknown id is not an error.
    pub fn delete(&self, id: &str) -> StorageResult<bool> {
        let _guard = self.guard();
        let mut fines = self.read()?;
        let before = fines.len();
        fines.retain(|fine| fine.id != id);
        if fines.len() == before {
            debug!(id, "delete of unknown fine ignored");
            return Ok(false);
        }
        self.write(&fines)?;
        debug!(id, "deleted fine");
        Ok(true)
    }

    /// Read the collection for a mutation. Backend failures surface; only a
    /// missing or unparseable blob reads as empty.
    fn read(&self) -> StorageResult<Vec<Fine>> {
        let Some(blob) = self.kv.get(FINES_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(fines) => Ok(fines),
            Err(e) => {
                warn!(error = %e, "stored fines are unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn write(&self, fines: &[Fine]) -> StorageResult<()> {
        let json = serde_json::to_string(fines)?;
        self.kv.set(FINES_KEY, &json)
    }
}
