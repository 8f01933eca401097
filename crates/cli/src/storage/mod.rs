// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local durable storage.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │ RecordStore │     │PendingQueue │
//! │  (fines)    │     │ (unsynced)  │
//! └──────┬──────┘     └──────┬──────┘
//!        │ finetrack-fines   │ finetrack-sync-queue
//!        ▼                   ▼
//! ┌───────────────────────────────────┐
//! │      KeyValueStore (trait)        │
//! │   SqliteKv │ MemoryKv             │
//! └───────────────────────────────────┘
//! ```
//!
//! Each component owns exactly one key and rewrites the whole JSON blob on
//! every mutation.

mod kv;
mod queue;
mod records;

pub use kv::{KeyValueStore, MemoryKv, SqliteKv};
pub use queue::{DrainReport, PendingQueue, QUEUE_KEY};
pub use records::{RecordStore, FINES_KEY};

/// Error type for local persistence.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite error.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
pub(crate) mod test_helpers;
