// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for finetrack-core operations.

use thiserror::Error;

/// All possible errors that can occur in finetrack-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid fine type: '{0}'\n  hint: valid types are: speeding, parking, dartford-crossing, mot, insurance, congestion, other")]
    InvalidFineType(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: unpaid, paid, overdue, disputed")]
    InvalidStatus(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for finetrack-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
