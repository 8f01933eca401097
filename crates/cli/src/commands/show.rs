// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;

use crate::cli::OutputFormat;
use crate::display::format_fine_details;
use crate::error::Result;
use crate::service::FineService;
use crate::sync::Remote;

use super::resolve_id;

pub async fn run<R: Remote>(
    service: &FineService<R>,
    id: &str,
    today: NaiveDate,
    output: OutputFormat,
) -> Result<()> {
    let id = resolve_id(service, id).await?;
    let fine = service.get_fine(&id).await?;

    match output {
        OutputFormat::Text => println!("{}", format_fine_details(&fine, today)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fine)?),
        OutputFormat::Id => println!("{}", fine.id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
