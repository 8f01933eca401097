// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::help;
use crate::mode::StorageMode;
use clap::{Parser, Subcommand, ValueEnum};
use finetrack_core::{FineStatus, FineType};

pub use args::{DetailArgs, EditArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_fine_type(s: &str) -> Result<FineType, String> {
    s.parse().map_err(|e: finetrack_core::Error| e.to_string())
}

fn parse_status(s: &str) -> Result<FineStatus, String> {
    s.parse().map_err(|e: finetrack_core::Error| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "finetrack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "An offline-first tracker for vehicle fines and charges")]
#[command(
    long_about = "An offline-first tracker for vehicle fines and charges.\n\n\
    Keep fines on this machine, on a fine service, or on both with queued sync."
)]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Use <path> as the data directory
    #[arg(short = 'C', long = "data-dir", global = true, value_name = "path")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory
    #[command(after_help = colors::examples("\
Examples:
  finetrack init                                         Local storage only
  finetrack init --mode hybrid --url http://nas:3001     Local with sync
  finetrack init --mode remote --url https://h/api       Remote service only"))]
    Init {
        /// Storage mode
        #[arg(long, value_enum, default_value_t = StorageMode::Local)]
        mode: StorageMode,

        /// Fine service base URL (remote and hybrid modes)
        #[arg(long)]
        url: Option<String>,

        /// Bearer token for the fine service
        #[arg(long)]
        api_key: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },

    /// Record a new fine
    #[command(after_help = colors::examples("\
Examples:
  finetrack add parking \"High St\" -a 60 --due 2025-01-10
  finetrack add speeding \"A1 camera\" -a 100 --due 2025-03-01 --vehicle \"AB12 CDE\"
  finetrack add dartford-crossing \"Crossing\" -a 2.5 --due 2025-01-12 -o id"))]
    Add {
        /// Fine type (speeding, parking, dartford-crossing, mot, insurance, congestion, other)
        #[arg(value_parser = parse_fine_type)]
        fine_type: FineType,

        /// Short title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Amount owed
        #[arg(long, short, allow_negative_numbers = true)]
        amount: f64,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,

        /// Issue date (YYYY-MM-DD, default: today)
        #[arg(long)]
        issued: Option<String>,

        /// Longer description
        #[arg(long, short)]
        description: Option<String>,

        /// Initial status
        #[arg(long, short, value_parser = parse_status, default_value = "unpaid")]
        status: FineStatus,

        #[command(flatten)]
        details: DetailArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List fines
    #[command(after_help = colors::examples("\
Examples:
  finetrack list                     All fines
  finetrack list --status unpaid     Unpaid fines (past due included)
  finetrack list --type parking      Parking fines only
  finetrack list --overdue           Fines past their due date
  finetrack list -o json             Machine-readable output"))]
    List {
        /// Filter by status (past-due unpaid fines count as overdue)
        #[arg(long, short, value_parser = parse_status)]
        status: Option<FineStatus>,

        /// Filter by fine type
        #[arg(long = "type", short = 't', value_parser = parse_fine_type)]
        fine_type: Option<FineType>,

        /// Only fines past their due date that still need action
        #[arg(long)]
        overdue: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show a fine's details
    Show {
        /// Fine ID (any unique prefix)
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Change a fine's fields
    #[command(after_help = colors::examples("\
Examples:
  finetrack edit <id> --amount 30            Reduced on appeal
  finetrack edit <id> --status disputed      Mark as under appeal
  finetrack edit <id> --clear-location       Remove the location"))]
    Edit {
        /// Fine ID (any unique prefix)
        id: String,

        #[command(flatten)]
        fields: EditArgs,
    },

    /// Mark fine(s) as paid
    Pay {
        /// Fine IDs (any unique prefix)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete fine(s)
    Delete {
        /// Fine IDs (any unique prefix)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Replay queued changes and refresh from the fine service
    Sync {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show storage mode, connectivity and pending changes
    Status {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
