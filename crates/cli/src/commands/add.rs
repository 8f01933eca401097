// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use finetrack_core::{FineStatus, FineType, NewFine};

use crate::cli::{DetailArgs, OutputFormat};
use crate::display::{format_money, short_id};
use crate::error::Result;
use crate::service::FineService;
use crate::sync::Remote;
use crate::validate::{
    parse_date, validate_amount, validate_and_trim_description, validate_and_trim_title,
    validate_new_fine, validate_optional_field,
};

/// Raw `add` arguments, as typed by the user.
#[derive(Debug, Clone)]
pub struct NewFineInput {
    pub fine_type: FineType,
    pub title: String,
    pub amount: f64,
    pub due: String,
    pub issued: Option<String>,
    pub description: Option<String>,
    pub status: FineStatus,
    pub details: DetailArgs,
}

/// Validate and normalize user input into a fine ready for storage.
///
/// The issue date defaults to `today`. Blank optional fields are dropped.
pub fn build_new_fine(input: NewFineInput, today: NaiveDate) -> Result<NewFine> {
    let issue_date = match input.issued.as_deref() {
        Some(issued) => parse_date(issued)?,
        None => today,
    };

    let fine = NewFine {
        fine_type: input.fine_type,
        title: validate_and_trim_title(&input.title)?,
        description: validate_and_trim_description(input.description.as_deref().unwrap_or(""))?,
        amount: validate_amount(input.amount)?,
        issue_date,
        due_date: parse_date(&input.due)?,
        status: input.status,
        reference_number: optional("Reference", input.details.reference.as_deref())?,
        location: optional("Location", input.details.location.as_deref())?,
        vehicle_reg: optional("Vehicle", input.details.vehicle.as_deref())?,
        payment_link: optional("Payment link", input.details.payment_link.as_deref())?,
    };
    validate_new_fine(&fine)?;
    Ok(fine)
}

fn optional(field: &'static str, value: Option<&str>) -> Result<Option<String>> {
    match value {
        Some(value) => validate_optional_field(field, value),
        None => Ok(None),
    }
}

pub async fn run<R: Remote>(
    service: &FineService<R>,
    input: NewFineInput,
    today: NaiveDate,
    output: OutputFormat,
) -> Result<()> {
    let new = build_new_fine(input, today)?;
    let fine = service.add_fine(new).await?;

    match output {
        OutputFormat::Text => println!(
            "Added [{}] {}: {} ({})",
            fine.fine_type,
            short_id(&fine.id),
            fine.title,
            format_money(fine.amount)
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string(&fine)?),
        OutputFormat::Id => println!("{}", fine.id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
