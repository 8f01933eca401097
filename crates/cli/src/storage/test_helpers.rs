// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for storage tests.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;
use finetrack_core::{Fine, FineStatus, FineType, NewFine};

use super::{KeyValueStore, MemoryKv, StorageError, StorageResult};

/// Create a test fine with the given id.
pub fn make_fine(id: &str) -> Fine {
    make_new_fine(&format!("Fine {}", id)).into_fine(id.to_string())
}

/// Create the High Street parking fine used across tests.
pub fn make_new_fine(title: &str) -> NewFine {
    NewFine {
        fine_type: FineType::Parking,
        title: title.to_string(),
        description: String::new(),
        amount: 60.0,
        issue_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        status: FineStatus::Unpaid,
        reference_number: None,
        location: None,
        vehicle_reg: None,
        payment_link: None,
    }
}

/// Memory backend whose reads or writes can be made to fail.
#[derive(Default)]
pub struct FailingKv {
    inner: MemoryKv,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(StorageError::Io(std::io::Error::other("quota exceeded")))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FailingKv {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("disk unavailable")));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.remove(key)
    }
}
