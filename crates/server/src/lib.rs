// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! finetrack-server: reference HTTP service for the finetrack sync protocol.
//!
//! Holds the canonical fine collection in memory and optionally mirrors it
//! to a JSON file after every mutation.

pub mod server;
pub mod state;

pub use server::{router, run, serve};
pub use state::{ServerState, StateError};
