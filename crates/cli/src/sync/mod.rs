// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote sync for the fine collection.
//!
//! Talks to the finetrack HTTP service and replays mutations made while it
//! was unreachable.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Synchronizer │────►│   Remote    │────►│    Fine     │
//! │              │◄────│   (trait)   │◄────│   Service   │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ├──────────────► RecordStore   (local, authoritative)
//!        ▼
//! ┌──────────────┐
//! │ PendingQueue │  (offline mutations)
//! └──────────────┘
//! ```
//!
//! # Features
//!
//! - REST client over reqwest with timeouts and bearer auth
//! - Local-first mutations with FIFO replay
//! - Remote-wins refresh after each replay
//! - Injectable remote trait for testing

mod http;
mod remote;
mod synchronizer;

pub use http::HttpRemote;
pub use remote::{Remote, RemoteError, RemoteFuture, RemoteResult};
pub use synchronizer::{SyncReport, Synchronizer};

#[cfg(test)]
pub(crate) mod test_helpers;
