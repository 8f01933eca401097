// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample_fine() -> Fine {
    Fine {
        id: "f-1".to_string(),
        fine_type: FineType::Parking,
        title: "High Street".to_string(),
        description: String::new(),
        amount: 60.0,
        issue_date: date("2025-01-01"),
        due_date: date("2025-01-10"),
        status: FineStatus::Unpaid,
        reference_number: None,
        location: Some("Leeds".to_string()),
        vehicle_reg: None,
        payment_link: None,
    }
}

// FineType parsing tests
#[parameterized(
    speeding = { "speeding", FineType::Speeding },
    parking_upper = { "PARKING", FineType::Parking },
    dartford_crossing = { "dartford-crossing", FineType::DartfordCrossing },
    dartford_legacy = { "dartford", FineType::DartfordCrossing },
    mot = { "mot", FineType::Mot },
    insurance = { "Insurance", FineType::Insurance },
    congestion = { "congestion", FineType::Congestion },
    other = { "other", FineType::Other },
)]
fn fine_type_from_str_valid(input: &str, expected: FineType) {
    assert_eq!(input.parse::<FineType>().unwrap(), expected);
}

#[parameterized(
    invalid = { "toll" },
    empty = { "" },
)]
fn fine_type_from_str_invalid(input: &str) {
    assert!(input.parse::<FineType>().is_err());
}

#[test]
fn fine_type_as_str_round_trips_through_from_str() {
    for fine_type in FineType::ALL {
        assert_eq!(fine_type.as_str().parse::<FineType>().unwrap(), fine_type);
    }
}

#[parameterized(
    unpaid = { "unpaid", FineStatus::Unpaid },
    paid = { "paid", FineStatus::Paid },
    overdue = { "OVERDUE", FineStatus::Overdue },
    disputed = { "disputed", FineStatus::Disputed },
)]
fn status_from_str_valid(input: &str, expected: FineStatus) {
    assert_eq!(input.parse::<FineStatus>().unwrap(), expected);
}

#[test]
fn status_from_str_invalid() {
    let err = "settled".parse::<FineStatus>().unwrap_err();
    assert!(err.to_string().contains("valid statuses are"));
}

#[test]
fn fine_serializes_with_camel_case_wire_names() {
    let json = serde_json::to_value(sample_fine()).unwrap();

    assert_eq!(json["type"], "parking");
    assert_eq!(json["issueDate"], "2025-01-01");
    assert_eq!(json["dueDate"], "2025-01-10");
    assert_eq!(json["status"], "unpaid");
    assert_eq!(json["location"], "Leeds");
    // Absent optionals are omitted
    assert!(json.get("referenceNumber").is_none());
    assert!(json.get("vehicleReg").is_none());
}

#[test]
fn fine_deserializes_legacy_dartford_type() {
    let json = r#"{
        "id": "1736500000000",
        "type": "dartford",
        "title": "Crossing",
        "description": "",
        "amount": 2.5,
        "dueDate": "2025-01-12",
        "issueDate": "2025-01-10",
        "status": "unpaid"
    }"#;

    let fine: Fine = serde_json::from_str(json).unwrap();
    assert_eq!(fine.fine_type, FineType::DartfordCrossing);
    assert_eq!(serde_json::to_value(&fine).unwrap()["type"], "dartford-crossing");
}

#[test]
fn new_fine_into_fine_keeps_fields() {
    let new = NewFine {
        fine_type: FineType::Speeding,
        title: "A1 camera".to_string(),
        description: "32 in a 30".to_string(),
        amount: 100.0,
        issue_date: date("2025-02-01"),
        due_date: date("2025-03-01"),
        status: FineStatus::Unpaid,
        reference_number: Some("REF-9".to_string()),
        location: None,
        vehicle_reg: Some("AB12 CDE".to_string()),
        payment_link: None,
    };

    let fine = new.into_fine("abc".to_string());
    assert_eq!(fine.id, "abc");
    assert_eq!(fine.title, "A1 camera");
    assert_eq!(fine.reference_number.as_deref(), Some("REF-9"));
    assert_eq!(fine.vehicle_reg.as_deref(), Some("AB12 CDE"));
}

#[test]
fn patch_apply_merges_only_present_fields() {
    let mut fine = sample_fine();
    let patch = FinePatch {
        amount: Some(30.0),
        status: Some(FineStatus::Paid),
        ..FinePatch::default()
    };

    patch.apply(&mut fine);

    assert_eq!(fine.amount, 30.0);
    assert_eq!(fine.status, FineStatus::Paid);
    assert_eq!(fine.title, "High Street");
    assert_eq!(fine.location.as_deref(), Some("Leeds"));
}

#[test]
fn patch_null_clears_optional_field_and_absent_leaves_it() {
    let mut fine = sample_fine();
    fine.reference_number = Some("PCN-1".to_string());

    let patch: FinePatch = serde_json::from_str(r#"{"location": null}"#).unwrap();
    assert_eq!(patch.location, Some(None));
    assert_eq!(patch.reference_number, None);

    patch.apply(&mut fine);
    assert_eq!(fine.location, None);
    assert_eq!(fine.reference_number.as_deref(), Some("PCN-1"));
}

#[test]
fn patch_ignores_id() {
    let mut fine = sample_fine();
    let patch: FinePatch = serde_json::from_str(r#"{"id": "other", "title": "New"}"#).unwrap();

    patch.apply(&mut fine);
    assert_eq!(fine.id, "f-1");
    assert_eq!(fine.title, "New");
}

#[test]
fn patch_serializes_clear_as_null() {
    let patch = FinePatch {
        vehicle_reg: Some(None),
        ..FinePatch::default()
    };
    let json = serde_json::to_value(&patch).unwrap();

    assert!(json["vehicleReg"].is_null());
    assert!(json.get("title").is_none());
}

#[test]
fn patch_is_empty() {
    assert!(FinePatch::default().is_empty());
    assert!(!FinePatch::status(FineStatus::Paid).is_empty());
}

#[parameterized(
    unpaid_past_due = { FineStatus::Unpaid, "2025-01-11", true },
    unpaid_on_due_date = { FineStatus::Unpaid, "2025-01-10", false },
    paid_past_due = { FineStatus::Paid, "2025-02-01", false },
    disputed_past_due = { FineStatus::Disputed, "2025-02-01", false },
    overdue_past_due = { FineStatus::Overdue, "2025-02-01", true },
)]
fn is_past_due(status: FineStatus, today: &str, expected: bool) {
    let mut fine = sample_fine();
    fine.status = status;
    assert_eq!(fine.is_past_due(date(today)), expected);
}

#[test]
fn display_status_derives_overdue_without_changing_status() {
    let fine = sample_fine();
    assert_eq!(fine.display_status(date("2025-01-20")), FineStatus::Overdue);
    assert_eq!(fine.display_status(date("2025-01-05")), FineStatus::Unpaid);
    assert_eq!(fine.status, FineStatus::Unpaid);
}
