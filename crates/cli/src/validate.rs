// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use finetrack_core::{FinePatch, NewFine};

use crate::error::{Error, Result};

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;
pub const MAX_FIELD_LENGTH: usize = 200;
pub const MAX_URL_LENGTH: usize = 2_000;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate and trim a title (non-empty after trimming, within length limits)
pub fn validate_and_trim_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field: "Title" });
    }
    check_length("Title", trimmed, MAX_TITLE_LENGTH)?;
    Ok(trimmed.to_string())
}

/// Validate and trim a description field.
pub fn validate_and_trim_description(description: &str) -> Result<String> {
    let trimmed = description.trim();
    check_length("Description", trimmed, MAX_DESCRIPTION_LENGTH)?;
    Ok(trimmed.to_string())
}

/// Validate an optional text field. Blank input means "no value".
pub fn validate_optional_field(field: &'static str, value: &str) -> Result<Option<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let max = if field == "Payment link" {
        MAX_URL_LENGTH
    } else {
        MAX_FIELD_LENGTH
    };
    check_length(field, trimmed, max)?;
    Ok(Some(trimmed.to_string()))
}

/// Validate that an amount is a finite number, zero or more
pub fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount(amount.to_string()));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(input.to_string()))
}

/// Validate a fine before it is added.
pub fn validate_new_fine(fine: &NewFine) -> Result<()> {
    validate_and_trim_title(&fine.title)?;
    validate_and_trim_description(&fine.description)?;
    validate_amount(fine.amount)?;
    Ok(())
}

/// Validate a patch before it is applied.
pub fn validate_patch(patch: &FinePatch) -> Result<()> {
    if patch.is_empty() {
        return Err(Error::NothingToUpdate);
    }
    if let Some(title) = &patch.title {
        validate_and_trim_title(title)?;
    }
    if let Some(description) = &patch.description {
        validate_and_trim_description(description)?;
    }
    if let Some(amount) = patch.amount {
        validate_amount(amount)?;
    }
    Ok(())
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
