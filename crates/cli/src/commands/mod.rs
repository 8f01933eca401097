// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;
pub mod status;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::future::Future;

use chrono::NaiveDate;
use finetrack_core::Fine;

use crate::error::{Error, Result};
use crate::service::FineService;
use crate::sync::Remote;

/// Drive `future` to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

/// The local calendar date, for past-due checks.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Resolve a full or partial id against the current collection.
pub async fn resolve_id<R: Remote>(service: &FineService<R>, partial: &str) -> Result<String> {
    let fines = service.load_fines().await?;
    resolve_in(&fines, partial)
}

/// Resolve ids for a mutation. Hybrid mode resolves against the local
/// store so that fines still waiting in the queue can be changed.
pub async fn resolve_ids_for_update<R: Remote>(
    service: &FineService<R>,
    partials: &[String],
) -> Result<Vec<String>> {
    let fines = service.working_fines().await?;
    partials.iter().map(|id| resolve_in(&fines, id)).collect()
}

/// Resolve `partial` to a single fine id: an exact match wins, otherwise
/// the prefix must be unique.
pub fn resolve_in(fines: &[Fine], partial: &str) -> Result<String> {
    if fines.iter().any(|fine| fine.id == partial) {
        return Ok(partial.to_string());
    }

    let matches: Vec<String> = fines
        .iter()
        .filter(|fine| !partial.is_empty() && fine.id.starts_with(partial))
        .map(|fine| fine.id.clone())
        .collect();

    match matches.len() {
        0 => Err(Error::FineNotFound(partial.to_string())),
        1 => Ok(matches.into_iter().next().unwrap_or_default()),
        _ => Err(Error::AmbiguousId {
            prefix: partial.to_string(),
            matches,
        }),
    }
}
