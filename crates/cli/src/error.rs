// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::storage::StorageError;
use crate::sync::RemoteError;

/// All possible errors that can occur in the ftrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'finetrack init' first\n  hint: no config found in {0}")]
    NotInitialized(String),

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("fine not found: {0}")]
    FineNotFound(String),

    #[error("ambiguous fine ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("invalid fine type: '{0}'\n  hint: valid types are: speeding, parking, dartford-crossing, mot, insurance, congestion, other")]
    InvalidFineType(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: unpaid, paid, overdue, disputed")]
    InvalidStatus(String),

    #[error("invalid date '{0}'\n  hint: dates use the YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("invalid amount '{0}'\n  hint: amounts must be a finite number, zero or more")]
    InvalidAmount(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("nothing to update\n  hint: pass at least one field to change")]
    NothingToUpdate,

    #[error("failed to generate unique fine ID after multiple retries")]
    IdGenerationFailed,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ftrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<finetrack_core::Error> for Error {
    fn from(e: finetrack_core::Error) -> Self {
        match e {
            finetrack_core::Error::InvalidFineType(s) => Error::InvalidFineType(s),
            finetrack_core::Error::InvalidStatus(s) => Error::InvalidStatus(s),
            finetrack_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
