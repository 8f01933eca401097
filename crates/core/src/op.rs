// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending operations for the offline queue.
//!
//! Every mutation that could not be confirmed against the remote service is
//! recorded as a [`PendingOp`] and replayed later, in the order it was issued.
//! The persisted form is an adjacently tagged record:
//!
//! ```json
//! {"operation": "add", "data": { ...fine... }}
//! {"operation": "update", "data": {"id": "...", "updates": { ...patch... }}}
//! {"operation": "delete", "data": {"id": "..."}}
//! ```

use serde::{Deserialize, Serialize};

use crate::fine::{Fine, FinePatch};

/// A mutation awaiting successful remote application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "data", rename_all = "snake_case")]
pub enum PendingOp {
    /// Create a fine.
    Add(Fine),
    /// Merge partial fields into an existing fine.
    Update { id: String, updates: FinePatch },
    /// Remove a fine.
    Delete { id: String },
}

impl PendingOp {
    /// Creates an update operation.
    pub fn update(id: impl Into<String>, updates: FinePatch) -> Self {
        PendingOp::Update {
            id: id.into(),
            updates,
        }
    }

    /// Creates a delete operation.
    pub fn delete(id: impl Into<String>) -> Self {
        PendingOp::Delete { id: id.into() }
    }

    /// Returns the id of the fine affected by this operation.
    pub fn fine_id(&self) -> &str {
        match self {
            PendingOp::Add(fine) => &fine.id,
            PendingOp::Update { id, .. } => id,
            PendingOp::Delete { id } => id,
        }
    }

    /// Short name of the operation, matching the persisted tag.
    pub fn kind(&self) -> &'static str {
        match self {
            PendingOp::Add(_) => "add",
            PendingOp::Update { .. } => "update",
            PendingOp::Delete { .. } => "delete",
        }
    }
}

#[cfg(test)]
#[path = "op_tests.rs"]
mod tests;
