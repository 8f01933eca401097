// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! finetrack-core: Shared library for the finetrack fine tracker
//!
//! This crate provides the domain types persisted by the finetrack client
//! and served by the finetrack reference server.

pub mod error;
pub mod fine;
pub mod op;

pub use error::{Error, Result};
pub use fine::{Fine, FinePatch, FineStatus, FineType, NewFine};
pub use op::PendingOp;
