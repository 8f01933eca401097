// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of fines for the CLI.

use chrono::NaiveDate;
use finetrack_core::Fine;

use crate::colors;
use crate::sync::SyncReport;

/// Number of id characters shown in list output.
const SHORT_ID_LEN: usize = 8;

/// Leading part of an id, enough to identify a fine by prefix.
pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

/// Render an amount in pounds with two decimals.
pub fn format_money(amount: f64) -> String {
    format!("£{:.2}", amount)
}

/// One-line summary: `- [type] (status) id: title  £0.00, due YYYY-MM-DD`
///
/// The status shown is the display status, so fines past their due date
/// read as overdue.
pub fn format_fine_line(fine: &Fine, today: NaiveDate, color: bool) -> String {
    let status = fine.display_status(today);
    let status_text = format!("({})", status);
    let status_text = if color {
        colors::status(status, &status_text)
    } else {
        status_text
    };
    format!(
        "- [{}] {} {}: {}  {}, due {}",
        fine.fine_type,
        status_text,
        short_id(&fine.id),
        fine.title,
        format_money(fine.amount),
        fine.due_date
    )
}

/// Multi-line details for `show`.
pub fn format_fine_details(fine: &Fine, today: NaiveDate) -> String {
    let mut lines = vec![
        format!("[{}] {}", fine.fine_type, fine.id),
        format!("Title: {}", fine.title),
        format!("Amount: {}", format_money(fine.amount)),
    ];

    let status = fine.display_status(today);
    if status == fine.status {
        lines.push(format!("Status: {}", status));
    } else {
        lines.push(format!("Status: {} (past due, recorded as {})", status, fine.status));
    }

    lines.push(format!("Issued: {}", fine.issue_date));
    lines.push(format!("Due: {}", fine.due_date));

    let optional = [
        ("Reference", &fine.reference_number),
        ("Location", &fine.location),
        ("Vehicle", &fine.vehicle_reg),
        ("Pay at", &fine.payment_link),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            lines.push(format!("{}: {}", label, value));
        }
    }

    if !fine.description.is_empty() {
        lines.push(String::new());
        lines.push("Description:".to_string());
        for line in fine.description.lines() {
            lines.push(format!("    {}", line));
        }
    }

    lines.join("\n")
}

/// Sum of amounts still owed (unpaid or overdue).
pub fn outstanding_total(fines: &[Fine]) -> f64 {
    fines
        .iter()
        .filter(|fine| fine.status.is_outstanding())
        .map(|fine| fine.amount)
        // An empty f64 sum is -0.0
        .fold(0.0, |total, amount| total + amount)
}

/// Footer under a list: count and outstanding total.
pub fn format_list_footer(fines: &[Fine]) -> String {
    let noun = if fines.len() == 1 { "fine" } else { "fines" };
    format!(
        "{} {}, {} outstanding",
        fines.len(),
        noun,
        format_money(outstanding_total(fines))
    )
}

/// Human summary of a sync pass.
pub fn format_sync_report(report: &SyncReport) -> String {
    if !report.reachable {
        return format!(
            "Remote unreachable; {} change(s) still pending",
            report.retained
        );
    }
    let mut line = format!(
        "Synced {} change(s), {} fine(s) on server",
        report.applied, report.pulled
    );
    if report.retained > 0 {
        line.push_str(&format!("; {} change(s) failed and remain queued", report.retained));
    }
    line
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
