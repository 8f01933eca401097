// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core fine types for the finetrack tracker.
//!
//! This module contains the only persisted domain entity, [`Fine`], together
//! with its classification ([`FineType`]), payment state ([`FineStatus`]),
//! the id-less creation form ([`NewFine`]) and the partial-update form
//! ([`FinePatch`]).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of a fine by what it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FineType {
    /// Speed camera or police speeding penalty.
    Speeding,
    /// Parking charge or penalty notice.
    Parking,
    /// Dart Charge for the Dartford crossing.
    #[serde(alias = "dartford")]
    DartfordCrossing,
    /// Missed or failed MOT.
    Mot,
    /// Driving without insurance.
    Insurance,
    /// Congestion or clean air zone charge.
    Congestion,
    /// Anything else.
    Other,
}

impl FineType {
    /// Every fine type, in display order.
    pub const ALL: [FineType; 7] = [
        FineType::Speeding,
        FineType::Parking,
        FineType::DartfordCrossing,
        FineType::Mot,
        FineType::Insurance,
        FineType::Congestion,
        FineType::Other,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            FineType::Speeding => "speeding",
            FineType::Parking => "parking",
            FineType::DartfordCrossing => "dartford-crossing",
            FineType::Mot => "mot",
            FineType::Insurance => "insurance",
            FineType::Congestion => "congestion",
            FineType::Other => "other",
        }
    }
}

impl fmt::Display for FineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FineType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "speeding" => Ok(FineType::Speeding),
            "parking" => Ok(FineType::Parking),
            "dartford-crossing" | "dartford" => Ok(FineType::DartfordCrossing),
            "mot" => Ok(FineType::Mot),
            "insurance" => Ok(FineType::Insurance),
            "congestion" => Ok(FineType::Congestion),
            "other" => Ok(FineType::Other),
            _ => Err(Error::InvalidFineType(s.to_string())),
        }
    }
}

/// Payment state of a fine.
///
/// The persisted status only changes on an explicit update. Whether a fine
/// is past its due date is derived by callers, see [`Fine::is_past_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FineStatus {
    /// Outstanding. Initial state for new fines.
    Unpaid,
    /// Settled.
    Paid,
    /// Explicitly marked overdue by the user.
    Overdue,
    /// Under appeal.
    Disputed,
}

impl FineStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            FineStatus::Unpaid => "unpaid",
            FineStatus::Paid => "paid",
            FineStatus::Overdue => "overdue",
            FineStatus::Disputed => "disputed",
        }
    }

    /// Returns true if money is still owed under this status.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, FineStatus::Unpaid | FineStatus::Overdue)
    }
}

impl fmt::Display for FineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FineStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "unpaid" => Ok(FineStatus::Unpaid),
            "paid" => Ok(FineStatus::Paid),
            "overdue" => Ok(FineStatus::Overdue),
            "disputed" => Ok(FineStatus::Disputed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// A single tracked monetary penalty or charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    /// Opaque unique identifier, assigned at creation and never changed.
    pub id: String,
    #[serde(rename = "type")]
    pub fine_type: FineType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Non-negative amount, currency-agnostic.
    pub amount: f64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: FineStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_reg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
}

impl Fine {
    /// Returns true when the due date has passed and the fine still needs
    /// action (neither paid nor under dispute).
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.due_date < today && !matches!(self.status, FineStatus::Paid | FineStatus::Disputed)
    }

    /// The status to show a user on `today`: past-due fines read as overdue.
    pub fn display_status(&self, today: NaiveDate) -> FineStatus {
        if self.is_past_due(today) {
            FineStatus::Overdue
        } else {
            self.status
        }
    }
}

/// A fine as handed over by the UI, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFine {
    #[serde(rename = "type")]
    pub fine_type: FineType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: FineStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_reg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
}

impl NewFine {
    /// Attach an id, producing the persisted form.
    pub fn into_fine(self, id: String) -> Fine {
        Fine {
            id,
            fine_type: self.fine_type,
            title: self.title,
            description: self.description,
            amount: self.amount,
            issue_date: self.issue_date,
            due_date: self.due_date,
            status: self.status,
            reference_number: self.reference_number,
            location: self.location,
            vehicle_reg: self.vehicle_reg,
            payment_link: self.payment_link,
        }
    }
}

/// Partial update of a fine.
///
/// `None` leaves a field unchanged. The optional text fields use a nested
/// option: `Some(None)` (a JSON `null`) clears the field. The id is not part
/// of a patch; unknown keys, `id` included, are ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinePatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub fine_type: Option<FineType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FineStatus>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_number: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub vehicle_reg: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_link: Option<Option<String>>,
}

impl FinePatch {
    /// A patch that only changes the status.
    pub fn status(status: FineStatus) -> Self {
        FinePatch {
            status: Some(status),
            ..FinePatch::default()
        }
    }

    /// Returns true if applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == FinePatch::default()
    }

    /// Merge the patch into `fine`. The id is never touched.
    pub fn apply(&self, fine: &mut Fine) {
        if let Some(fine_type) = self.fine_type {
            fine.fine_type = fine_type;
        }
        if let Some(title) = &self.title {
            fine.title = title.clone();
        }
        if let Some(description) = &self.description {
            fine.description = description.clone();
        }
        if let Some(amount) = self.amount {
            fine.amount = amount;
        }
        if let Some(issue_date) = self.issue_date {
            fine.issue_date = issue_date;
        }
        if let Some(due_date) = self.due_date {
            fine.due_date = due_date;
        }
        if let Some(status) = self.status {
            fine.status = status;
        }
        if let Some(reference_number) = &self.reference_number {
            fine.reference_number = reference_number.clone();
        }
        if let Some(location) = &self.location {
            fine.location = location.clone();
        }
        if let Some(vehicle_reg) = &self.vehicle_reg {
            fine.vehicle_reg = vehicle_reg.clone();
        }
        if let Some(payment_link) = &self.payment_link {
            fine.payment_link = payment_link.clone();
        }
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent key (`None`,
/// via `#[serde(default)]`).
fn double_option<'de, D, T>(de: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[cfg(test)]
#[path = "fine_tests.rs"]
mod tests;
