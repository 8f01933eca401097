// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation between the local record store and the remote service.
//!
//! Local state is authoritative for the user's view. Every mutation lands
//! locally first and is then forwarded to the remote, or queued for replay
//! when the remote cannot take it right now.

use finetrack_core::{Fine, PendingOp};
use tracing::{debug, info, warn};

use super::http::HttpRemote;
use super::remote::{Remote, RemoteResult};
use crate::error::Result;
use crate::storage::{PendingQueue, RecordStore};

/// Outcome of a [`Synchronizer::resync`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Whether the remote answered the reachability probe.
    pub reachable: bool,
    /// Queued operations the remote accepted.
    pub applied: usize,
    /// Queued operations still waiting.
    pub retained: usize,
    /// Fines in the local store after the final pull.
    pub pulled: usize,
}

/// Keeps the local store and the remote service in step.
pub struct Synchronizer<R: Remote = HttpRemote> {
    store: RecordStore,
    queue: PendingQueue,
    remote: R,
}

impl<R: Remote> Synchronizer<R> {
    pub fn new(store: RecordStore, queue: PendingQueue, remote: R) -> Self {
        Synchronizer {
            store,
            queue,
            remote,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn queue(&self) -> &PendingQueue {
        &self.queue
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Number of mutations waiting for the remote.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Refresh the local store from the remote.
    ///
    /// The remote copy replaces the local one wholesale. When the remote is
    /// unreachable or the fetch fails, the local copy is returned unchanged.
    pub async fn pull(&self) -> Result<Vec<Fine>> {
        if !self.remote.is_reachable() {
            debug!("remote unreachable, serving local fines");
            return Ok(self.store.load());
        }

        match self.remote.load_fines().await {
            Ok(fines) => {
                self.store.save_all(&fines)?;
                debug!(count = fines.len(), "pulled fines from remote");
                Ok(fines)
            }
            Err(e) => {
                warn!(error = %e, "failed to load fines from remote, using local data");
                Ok(self.store.load())
            }
        }
    }

    /// Apply a mutation locally, then forward it or queue it.
    ///
    /// Returns the resulting local fine for adds and updates. A mutation that
    /// fails locally (an update of an unknown id, a storage error) goes
    /// nowhere else. Remote failures are absorbed by queueing.
    pub async fn push_mutation(&self, op: PendingOp) -> Result<Option<Fine>> {
        let local = self.apply_local(&op)?;

        // Replay order must match local order, so nothing jumps the queue.
        if !self.queue.is_empty() {
            debug!(kind = op.kind(), id = op.fine_id(), "earlier operations pending, queueing");
            self.queue.enqueue(op)?;
            return Ok(local);
        }

        if !self.remote.is_reachable() {
            debug!(kind = op.kind(), id = op.fine_id(), "remote unreachable, queueing");
            self.queue.enqueue(op)?;
            return Ok(local);
        }

        if let Err(e) = apply_remote(&self.remote, &op).await {
            warn!(
                kind = op.kind(),
                id = op.fine_id(),
                error = %e,
                "remote rejected mutation, queued for sync"
            );
            self.queue.enqueue(op)?;
        }

        Ok(local)
    }

    /// Replay the queue and refresh from the remote.
    ///
    /// Does nothing beyond a reachability probe when the remote is down.
    pub async fn resync(&self) -> Result<SyncReport> {
        if !self.remote.probe().await {
            info!(pending = self.queue.len(), "remote unreachable, skipping sync");
            return Ok(SyncReport {
                reachable: false,
                retained: self.queue.len(),
                ..SyncReport::default()
            });
        }

        let remote = &self.remote;
        let drained = self
            .queue
            .drain(|op| async move { apply_remote(remote, &op).await })
            .await?;
        let fines = self.pull().await?;

        info!(
            applied = drained.applied,
            retained = drained.retained,
            pulled = fines.len(),
            "sync complete"
        );
        Ok(SyncReport {
            reachable: true,
            applied: drained.applied,
            retained: drained.retained,
            pulled: fines.len(),
        })
    }

    fn apply_local(&self, op: &PendingOp) -> Result<Option<Fine>> {
        match op {
            PendingOp::Add(fine) => Ok(Some(self.store.add(fine.clone())?)),
            PendingOp::Update { id, updates } => Ok(Some(self.store.update(id, updates)?)),
            PendingOp::Delete { id } => {
                self.store.delete(id)?;
                Ok(None)
            }
        }
    }
}

/// Send one mutation to the remote.
///
/// A delete of an id the remote no longer has is treated as done.
async fn apply_remote<R: Remote + ?Sized>(remote: &R, op: &PendingOp) -> RemoteResult<()> {
    match op {
        // A 409 means an earlier attempt reached the server after all
        PendingOp::Add(fine) => match remote.add_fine(fine).await {
            Err(e) if e.status() == Some(409) => {
                debug!(id = %fine.id, "remote already has fine");
                Ok(())
            }
            other => other.map(|_| ()),
        },
        PendingOp::Update { id, updates } => remote.update_fine(id, updates).await.map(|_| ()),
        PendingOp::Delete { id } => match remote.delete_fine(id).await {
            Err(e) if e.status() == Some(404) => {
                debug!(id = %id, "remote already deleted fine");
                Ok(())
            }
            other => other,
        },
    }
}

#[cfg(test)]
#[path = "synchronizer_tests.rs"]
mod tests;
