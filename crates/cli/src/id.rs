// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use uuid::Uuid;

use crate::error::{Error, Result};

/// Attempts before giving up on finding an unused id.
const MAX_ATTEMPTS: usize = 8;

/// Generate a fine ID: a random (v4) UUID in hyphenated lowercase form.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate an ID that `exists` does not know about, re-rolling on collision.
pub fn generate_unique_id<F>(exists: F) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let id = generate_id();
        if !exists(&id) {
            return Ok(id);
        }
    }
    Err(Error::IdGenerationFailed)
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
