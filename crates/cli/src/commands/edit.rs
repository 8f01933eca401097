// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use finetrack_core::{FinePatch, FineStatus};

use crate::cli::EditArgs;
use crate::display::short_id;
use crate::error::Result;
use crate::service::FineService;
use crate::sync::Remote;
use crate::validate::{
    parse_date, validate_amount, validate_and_trim_description, validate_and_trim_title,
    validate_optional_field, validate_patch,
};

use super::{resolve_ids_for_update, resolve_in};

/// Turn `edit` flags into a patch. Fails when no flag was given.
pub fn build_patch(args: &EditArgs) -> Result<FinePatch> {
    let patch = FinePatch {
        fine_type: args.fine_type,
        title: args
            .title
            .as_deref()
            .map(validate_and_trim_title)
            .transpose()?,
        description: args
            .description
            .as_deref()
            .map(validate_and_trim_description)
            .transpose()?,
        amount: args.amount.map(validate_amount).transpose()?,
        issue_date: args.issued.as_deref().map(parse_date).transpose()?,
        due_date: args.due.as_deref().map(parse_date).transpose()?,
        status: args.status,
        reference_number: detail(
            "Reference",
            args.details.reference.as_deref(),
            args.clear_reference,
        )?,
        location: detail("Location", args.details.location.as_deref(), args.clear_location)?,
        vehicle_reg: detail("Vehicle", args.details.vehicle.as_deref(), args.clear_vehicle)?,
        payment_link: detail(
            "Payment link",
            args.details.payment_link.as_deref(),
            args.clear_payment_link,
        )?,
    };
    validate_patch(&patch)?;
    Ok(patch)
}

/// `None` leaves the field alone, `Some(None)` clears it. A blank value
/// also clears.
fn detail(field: &'static str, value: Option<&str>, clear: bool) -> Result<Option<Option<String>>> {
    if clear {
        return Ok(Some(None));
    }
    value
        .map(|value| validate_optional_field(field, value))
        .transpose()
}

pub async fn run<R: Remote>(service: &FineService<R>, id: &str, args: &EditArgs) -> Result<()> {
    let patch = build_patch(args)?;
    let fines = service.working_fines().await?;
    let id = resolve_in(&fines, id)?;
    let fine = service.update_fine(&id, patch).await?;
    println!("Updated {}: {}", short_id(&fine.id), fine.title);
    Ok(())
}

/// Mark each fine as paid. Ids are resolved up front so that a bad id
/// changes nothing.
pub async fn pay<R: Remote>(service: &FineService<R>, ids: &[String]) -> Result<()> {
    for id in resolve_ids_for_update(service, ids).await? {
        let fine = service
            .update_fine(&id, FinePatch::status(FineStatus::Paid))
            .await?;
        println!("Paid {}: {}", short_id(&fine.id), fine.title);
    }
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
