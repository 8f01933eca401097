// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! FineService: the single persistence entry point for callers.
//!
//! Routes every operation to the strategy selected by the storage mode:
//! - Local: record store only
//! - Remote: remote service only, nothing cached
//! - Hybrid: record store first, remote kept in step by the synchronizer

use std::sync::Arc;

use finetrack_core::{Fine, FinePatch, NewFine, PendingOp};
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::mode::StorageMode;
use crate::storage::{KeyValueStore, PendingQueue, RecordStore};
use crate::sync::{HttpRemote, Remote, RemoteError, SyncReport, Synchronizer};

/// Backing strategy, one per storage mode.
pub enum Backend<R: Remote = HttpRemote> {
    Local(RecordStore),
    Remote(R),
    Hybrid(Synchronizer<R>),
}

/// Mode-independent access to the fine collection.
pub struct FineService<R: Remote = HttpRemote> {
    backend: Backend<R>,
}

impl FineService<HttpRemote> {
    /// Build the service described by `config` over the given local backend.
    ///
    /// Remote-only mode never touches `kv`.
    pub fn from_config(config: &Config, kv: Arc<dyn KeyValueStore>) -> Result<Self> {
        let service = match config.mode {
            StorageMode::Local => FineService::local(RecordStore::new(kv)),
            StorageMode::Remote => FineService::remote(HttpRemote::new(config.remote_config()?)?),
            StorageMode::Hybrid => {
                let remote = HttpRemote::new(config.remote_config()?)?;
                let queue = PendingQueue::open(Arc::clone(&kv))?;
                FineService::hybrid(Synchronizer::new(RecordStore::new(kv), queue, remote))
            }
        };
        debug!(mode = %service.mode(), "storage ready");
        Ok(service)
    }
}

impl<R: Remote> FineService<R> {
    pub fn local(store: RecordStore) -> Self {
        FineService {
            backend: Backend::Local(store),
        }
    }

    pub fn remote(remote: R) -> Self {
        FineService {
            backend: Backend::Remote(remote),
        }
    }

    pub fn hybrid(synchronizer: Synchronizer<R>) -> Self {
        FineService {
            backend: Backend::Hybrid(synchronizer),
        }
    }

    pub fn mode(&self) -> StorageMode {
        match &self.backend {
            Backend::Local(_) => StorageMode::Local,
            Backend::Remote(_) => StorageMode::Remote,
            Backend::Hybrid(_) => StorageMode::Hybrid,
        }
    }

    pub fn backend(&self) -> &Backend<R> {
        &self.backend
    }

    /// The synchronizer, in hybrid mode.
    pub fn synchronizer(&self) -> Option<&Synchronizer<R>> {
        match &self.backend {
            Backend::Hybrid(sync) => Some(sync),
            _ => None,
        }
    }

    /// Load the full collection.
    ///
    /// In hybrid mode this refreshes from the remote when it is reachable.
    pub async fn load_fines(&self) -> Result<Vec<Fine>> {
        match &self.backend {
            Backend::Local(store) => Ok(store.load()),
            Backend::Remote(remote) => Ok(remote.load_fines().await?),
            Backend::Hybrid(sync) => sync.pull().await,
        }
    }

    /// The collection mutations act on, without refreshing.
    ///
    /// In hybrid mode this is the local store, which still holds queued
    /// changes a pull would hide until they are replayed.
    pub async fn working_fines(&self) -> Result<Vec<Fine>> {
        match &self.backend {
            Backend::Local(store) => Ok(store.load()),
            Backend::Remote(remote) => Ok(remote.load_fines().await?),
            Backend::Hybrid(sync) => Ok(sync.store().load()),
        }
    }

    /// Look up one fine by id.
    pub async fn get_fine(&self, id: &str) -> Result<Fine> {
        self.load_fines()
            .await?
            .into_iter()
            .find(|fine| fine.id == id)
            .ok_or_else(|| Error::FineNotFound(id.to_string()))
    }

    /// Assign an id to `new` and store it.
    pub async fn add_fine(&self, new: NewFine) -> Result<Fine> {
        match &self.backend {
            Backend::Local(store) => {
                let fine = new.into_fine(generate_unique_id(|id| store.contains(id))?);
                Ok(store.add(fine)?)
            }
            Backend::Remote(remote) => {
                let fine = new.into_fine(crate::id::generate_id());
                Ok(remote.add_fine(&fine).await?)
            }
            Backend::Hybrid(sync) => {
                let fine = new.into_fine(generate_unique_id(|id| sync.store().contains(id))?);
                let id = fine.id.clone();
                sync.push_mutation(PendingOp::Add(fine))
                    .await?
                    .ok_or(Error::FineNotFound(id))
            }
        }
    }

    /// Merge `updates` into the fine with `id`, returning the result.
    pub async fn update_fine(&self, id: &str, updates: FinePatch) -> Result<Fine> {
        match &self.backend {
            Backend::Local(store) => store.update(id, &updates),
            Backend::Remote(remote) => {
                remote
                    .update_fine(id, &updates)
                    .await
                    .map_err(|e| not_found_or(e, id))
            }
            Backend::Hybrid(sync) => sync
                .push_mutation(PendingOp::update(id, updates))
                .await?
                .ok_or_else(|| Error::FineNotFound(id.to_string())),
        }
    }

    /// Remove the fine with `id`. Removing an unknown id succeeds.
    pub async fn delete_fine(&self, id: &str) -> Result<()> {
        match &self.backend {
            Backend::Local(store) => {
                store.delete(id)?;
                Ok(())
            }
            Backend::Remote(remote) => match remote.delete_fine(id).await {
                Err(e) if e.status() == Some(404) => {
                    debug!(id, "remote delete of unknown fine ignored");
                    Ok(())
                }
                other => other.map_err(Error::from),
            },
            Backend::Hybrid(sync) => {
                sync.push_mutation(PendingOp::delete(id)).await?;
                Ok(())
            }
        }
    }

    /// Whether the remote service is believed reachable. Always false in
    /// local mode.
    pub fn is_online(&self) -> bool {
        match &self.backend {
            Backend::Local(_) => false,
            Backend::Remote(remote) => remote.is_reachable(),
            Backend::Hybrid(sync) => sync.remote().is_reachable(),
        }
    }

    /// Refresh and return the reachability signal. Always false in local mode.
    pub async fn check_connection(&self) -> bool {
        match &self.backend {
            Backend::Local(_) => false,
            Backend::Remote(remote) => remote.probe().await,
            Backend::Hybrid(sync) => sync.remote().probe().await,
        }
    }

    /// Mutations waiting for the remote (hybrid mode only).
    pub fn pending_count(&self) -> usize {
        self.synchronizer().map_or(0, Synchronizer::pending_count)
    }

    /// Run a sync pass. Returns `None` in modes without a queue.
    pub async fn sync_with_server(&self) -> Result<Option<SyncReport>> {
        match self.synchronizer() {
            Some(sync) => Ok(Some(sync.resync().await?)),
            None => Ok(None),
        }
    }
}

fn not_found_or(err: RemoteError, id: &str) -> Error {
    if err.status() == Some(404) {
        Error::FineNotFound(id.to_string())
    } else {
        Error::Remote(err)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
