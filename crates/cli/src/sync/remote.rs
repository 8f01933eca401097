// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote abstraction for the fine service.
//!
//! Provides a trait-based remote layer that enables:
//! - Real HTTP requests for production ([`HttpRemote`](super::HttpRemote))
//! - Fake remotes for unit testing

use std::future::Future;
use std::pin::Pin;

use finetrack_core::{Fine, FinePatch};

/// Error type for remote operations.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The service answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The request did not complete in time.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// No connection could be established.
    #[error("connection to {url} failed: {reason}")]
    Connect { url: String, reason: String },

    /// The request could not be built or sent.
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The response body was not what the protocol promises.
    #[error("invalid response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// The remote is known to be unreachable; no request was made.
    #[error("remote unreachable")]
    Unreachable,
}

impl RemoteError {
    /// HTTP status carried by the error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the error means the service could not be reached.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            RemoteError::Timeout { .. } | RemoteError::Connect { .. } | RemoteError::Unreachable
        )
    }
}

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Boxed future returned by [`Remote`] methods.
pub type RemoteFuture<'a, T> = Pin<Box<dyn Future<Output = RemoteResult<T>> + Send + 'a>>;

/// Networked CRUD against the backing fine service.
///
/// Each call issues exactly one request. There is no retry at this layer;
/// retries belong to the synchronizer's offline queue.
pub trait Remote: Send + Sync {
    /// Fetch the full fine collection.
    fn load_fines(&self) -> RemoteFuture<'_, Vec<Fine>>;

    /// Create a fine, returning the stored record.
    fn add_fine<'a>(&'a self, fine: &'a Fine) -> RemoteFuture<'a, Fine>;

    /// Merge partial fields into a fine, returning the updated record.
    fn update_fine<'a>(&'a self, id: &'a str, updates: &'a FinePatch) -> RemoteFuture<'a, Fine>;

    /// Remove a fine.
    fn delete_fine<'a>(&'a self, id: &'a str) -> RemoteFuture<'a, ()>;

    /// Best-effort connectivity signal.
    ///
    /// A positive answer may still be followed by a failed request.
    fn is_reachable(&self) -> bool;

    /// Refresh the connectivity signal, returning the new value.
    fn probe(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        Box::pin(async move { self.is_reachable() })
    }
}
