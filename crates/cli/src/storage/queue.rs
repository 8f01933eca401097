// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline queue for mutations not yet confirmed by the remote.
//!
//! The queue is a JSON array persisted under a single key and mirrored in
//! memory. Every change is written through before the call returns, so the
//! queue survives process restarts in FIFO order.

use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use finetrack_core::PendingOp;
use tracing::{debug, warn};

use super::kv::KeyValueStore;
use super::StorageResult;

/// Key holding the JSON array of pending operations.
pub const QUEUE_KEY: &str = "finetrack-sync-queue";

/// Outcome of a [`PendingQueue::drain`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Entries applied and removed.
    pub applied: usize,
    /// Entries that failed and were kept.
    pub retained: usize,
}

/// Durable, ordered log of pending operations.
pub struct PendingQueue {
    kv: Arc<dyn KeyValueStore>,
    ops: Mutex<Vec<PendingOp>>,
    /// Held for the duration of a drain.
    draining: tokio::sync::Mutex<()>,
}

impl PendingQueue {
    /// Open the queue persisted in `kv`.
    ///
    /// An unreadable blob is treated as an empty queue.
    pub fn open(kv: Arc<dyn KeyValueStore>) -> StorageResult<Self> {
        let ops = match kv.get(QUEUE_KEY)? {
            Some(blob) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                warn!(error = %e, "pending queue is unreadable, starting empty");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Ok(PendingQueue {
            kv,
            ops: Mutex::new(ops),
            draining: tokio::sync::Mutex::new(()),
        })
    }

    fn ops(&self) -> MutexGuard<'_, Vec<PendingOp>> {
        self.ops.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append an operation. It is persisted before this returns.
    pub fn enqueue(&self, op: PendingOp) -> StorageResult<()> {
        let mut ops = self.ops();
        let kind = op.kind();
        let id = op.fine_id().to_string();
        ops.push(op);
        if let Err(e) = self.persist(&ops) {
            ops.pop();
            return Err(e);
        }
        debug!(kind, id = %id, pending = ops.len(), "queued operation");
        Ok(())
    }

    /// Read all queued operations without removing them.
    pub fn peek_all(&self) -> Vec<PendingOp> {
        self.ops().clone()
    }

    /// Get the number of queued operations.
    pub fn len(&self) -> usize {
        self.ops().len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.ops().is_empty()
    }

    /// Clear all queued operations.
    pub fn clear(&self) -> StorageResult<()> {
        let mut ops = self.ops();
        self.kv.remove(QUEUE_KEY)?;
        ops.clear();
        Ok(())
    }

    /// Apply every queued operation in order.
    ///
    /// Entries for which `apply` succeeds are removed, one persist per
    /// success. Failed entries stay queued in their original relative order;
    /// a failure never stops the pass. Operations enqueued while a drain runs
    /// end up after the survivors.
    pub async fn drain<F, Fut, E>(&self, mut apply: F) -> StorageResult<DrainReport>
    where
        F: FnMut(PendingOp) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Display,
    {
        let _draining = self.draining.lock().await;
        let snapshot = self.peek_all();
        let mut report = DrainReport::default();

        for op in snapshot {
            let kind = op.kind();
            let id = op.fine_id().to_string();

            match apply(op).await {
                Ok(()) => {
                    // Survivors of this pass sit in front of the applied entry.
                    let mut ops = self.ops();
                    if report.retained < ops.len() {
                        let applied = ops.remove(report.retained);
                        if let Err(e) = self.persist(&ops) {
                            ops.insert(report.retained, applied);
                            return Err(e);
                        }
                    }
                    report.applied += 1;
                    debug!(kind, id = %id, "replayed queued operation");
                }
                Err(e) => {
                    warn!(kind, id = %id, error = %e, "queued operation failed, keeping it");
                    report.retained += 1;
                }
            }
        }

        Ok(report)
    }

    fn persist(&self, ops: &[PendingOp]) -> StorageResult<()> {
        let json = serde_json::to_string(ops)?;
        self.kv.set(QUEUE_KEY, &json)
    }
}
