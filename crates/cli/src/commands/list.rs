// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use finetrack_core::{Fine, FineStatus, FineType};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{format_fine_line, format_list_footer};
use crate::error::Result;
use crate::service::FineService;
use crate::sync::Remote;

/// Filters for `list`. Empty filters match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFilter {
    /// Compared against the display status, so past-due fines match `overdue`.
    pub status: Option<FineStatus>,
    pub fine_type: Option<FineType>,
    pub overdue: bool,
}

/// Keep the fines matching every filter, ordered by due date.
pub fn filter_fines(fines: Vec<Fine>, filter: ListFilter, today: NaiveDate) -> Vec<Fine> {
    let mut fines: Vec<Fine> = fines
        .into_iter()
        .filter(|fine| {
            filter
                .status
                .map_or(true, |status| fine.display_status(today) == status)
        })
        .filter(|fine| filter.fine_type.map_or(true, |t| fine.fine_type == t))
        .filter(|fine| !filter.overdue || fine.is_past_due(today))
        .collect();
    // Stable: fines due the same day keep their stored order
    fines.sort_by_key(|fine| fine.due_date);
    fines
}

pub async fn run<R: Remote>(
    service: &FineService<R>,
    filter: ListFilter,
    today: NaiveDate,
    output: OutputFormat,
) -> Result<()> {
    let fines = filter_fines(service.load_fines().await?, filter, today);

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fines)?),
        OutputFormat::Id => {
            for fine in &fines {
                println!("{}", fine.id);
            }
        }
        OutputFormat::Text => {
            if fines.is_empty() {
                println!("No fines");
                return Ok(());
            }
            let color = colors::should_colorize();
            for fine in &fines {
                println!("{}", format_fine_line(fine, today, color));
            }
            let footer = format_list_footer(&fines);
            println!();
            if color {
                println!("{}", colors::context(&footer));
            } else {
                println!("{}", footer);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
