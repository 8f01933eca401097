// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::mode::StorageMode;
use crate::service::FineService;
use crate::sync::Remote;

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub mode: StorageMode,
    pub online: bool,
    pub pending: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    pub data_dir: String,
}

/// Probe the remote and gather what `status` reports.
pub async fn collect<R: Remote>(
    service: &FineService<R>,
    remote_url: Option<&str>,
    data_dir: &Path,
) -> StatusReport {
    StatusReport {
        mode: service.mode(),
        online: service.check_connection().await,
        pending: service.pending_count(),
        remote_url: remote_url.map(str::to_string),
        data_dir: data_dir.display().to_string(),
    }
}

pub async fn run<R: Remote>(
    service: &FineService<R>,
    remote_url: Option<&str>,
    data_dir: &Path,
    output: OutputFormat,
) -> Result<()> {
    let report = collect(service, remote_url, data_dir).await;

    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Mode: {}", report.mode);
    println!("Data: {}", report.data_dir);
    if let Some(url) = &report.remote_url {
        let state = if report.online { "online" } else { "offline" };
        println!("Remote: {} ({})", url, state);
    }
    if report.mode.supports_sync() {
        println!("Pending changes: {}", report.pending);
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
