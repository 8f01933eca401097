// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::display::short_id;
use crate::error::Result;
use crate::service::FineService;
use crate::sync::Remote;

use super::resolve_ids_for_update;

/// Delete each fine. All ids are resolved before anything is removed.
pub async fn run<R: Remote>(service: &FineService<R>, ids: &[String]) -> Result<()> {
    for id in resolve_ids_for_update(service, ids).await? {
        service.delete_fine(&id).await?;
        println!("Deleted {}", short_id(&id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
