// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use tracing::info;

use crate::config::{init_data_dir, Config, RemoteConfig};
use crate::error::Result;
use crate::mode::StorageMode;

/// Write a fresh config into `data_dir`.
///
/// A URL without a mode that uses it is still recorded, so that switching
/// modes later only needs a config edit.
pub fn run(
    data_dir: &Path,
    mode: StorageMode,
    url: Option<String>,
    api_key: Option<String>,
    timeout_secs: u64,
) -> Result<()> {
    let remote = url.map(|url| RemoteConfig {
        url,
        api_key,
        timeout_secs,
    });
    let config = Config::new(mode, remote)?;
    init_data_dir(data_dir, &config)?;

    info!(dir = %data_dir.display(), %mode, "initialized data directory");
    println!("Initialized finetrack in {} ({} mode)", data_dir.display(), mode);
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
