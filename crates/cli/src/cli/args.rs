// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` so that `add` and
//! `edit` spell the optional fine fields the same way.

use clap::Args;
use finetrack_core::{FineStatus, FineType};

use super::{parse_fine_type, parse_status};

/// Optional detail fields of a fine.
#[derive(Args, Clone, Debug, Default)]
pub struct DetailArgs {
    /// Penalty charge notice or other reference number
    #[arg(long)]
    pub reference: Option<String>,

    /// Where the fine was issued
    #[arg(long)]
    pub location: Option<String>,

    /// Vehicle registration
    #[arg(long)]
    pub vehicle: Option<String>,

    /// URL where the fine can be paid
    #[arg(long)]
    pub payment_link: Option<String>,
}

/// Fields that `edit` can change. Every field is optional.
#[derive(Args, Clone, Debug, Default)]
pub struct EditArgs {
    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long, short)]
    pub description: Option<String>,

    /// New amount
    #[arg(long, short, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// New fine type
    #[arg(long = "type", short = 't', value_parser = parse_fine_type)]
    pub fine_type: Option<FineType>,

    /// New status (unpaid, paid, overdue, disputed)
    #[arg(long, short, value_parser = parse_status)]
    pub status: Option<FineStatus>,

    /// New issue date (YYYY-MM-DD)
    #[arg(long)]
    pub issued: Option<String>,

    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,

    #[command(flatten)]
    pub details: DetailArgs,

    /// Remove the reference number
    #[arg(long, conflicts_with = "reference")]
    pub clear_reference: bool,

    /// Remove the location
    #[arg(long, conflicts_with = "location")]
    pub clear_location: bool,

    /// Remove the vehicle registration
    #[arg(long, conflicts_with = "vehicle")]
    pub clear_vehicle: bool,

    /// Remove the payment link
    #[arg(long, conflicts_with = "payment_link")]
    pub clear_payment_link: bool,
}
