// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

fn edit_fields(args: &[&str]) -> (String, EditArgs) {
    match parse(args).unwrap().command {
        Command::Edit { id, fields } => (id, fields),
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn test_edit_amount_and_status() {
    let (id, fields) = edit_fields(&["finetrack", "edit", "3f2a", "-a", "30", "-s", "disputed"]);
    assert_eq!(id, "3f2a");
    assert_eq!(fields.amount, Some(30.0));
    assert_eq!(fields.status, Some(FineStatus::Disputed));
    assert!(fields.title.is_none());
}

#[test]
fn test_edit_type() {
    let (_, fields) = edit_fields(&["finetrack", "edit", "3f2a", "--type", "speeding"]);
    assert_eq!(fields.fine_type, Some(FineType::Speeding));
}

#[test]
fn test_edit_clear_flags() {
    let (_, fields) = edit_fields(&[
        "finetrack",
        "edit",
        "3f2a",
        "--clear-location",
        "--clear-payment-link",
    ]);
    assert!(fields.clear_location);
    assert!(fields.clear_payment_link);
    assert!(!fields.clear_reference);
}

#[test]
fn test_edit_set_and_clear_same_field_conflict() {
    assert!(parse(&[
        "finetrack",
        "edit",
        "3f2a",
        "--location",
        "Leeds",
        "--clear-location",
    ])
    .is_err());
}

#[test]
fn test_pay_and_delete_take_many_ids() {
    match parse(&["finetrack", "pay", "a", "b"]).unwrap().command {
        Command::Pay { ids } => assert_eq!(ids, vec!["a", "b"]),
        _ => panic!("Expected Pay command"),
    }
    assert!(parse(&["finetrack", "delete"]).is_err());
}
