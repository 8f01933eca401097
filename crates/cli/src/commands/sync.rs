// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::display::format_sync_report;
use crate::error::Result;
use crate::service::FineService;
use crate::sync::Remote;

pub async fn run<R: Remote>(service: &FineService<R>, output: OutputFormat) -> Result<()> {
    let report = service.sync_with_server().await?;

    match (report, output) {
        (None, OutputFormat::Json) => println!("null"),
        (None, _) => println!("Nothing to sync in {} mode", service.mode()),
        (Some(report), OutputFormat::Json) => {
            let json = serde_json::json!({
                "reachable": report.reachable,
                "applied": report.applied,
                "retained": report.retained,
                "pulled": report.pulled,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        (Some(report), _) => println!("{}", format_sync_report(&report)),
    }
    Ok(())
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
