// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ftrs - an offline-first tracker for vehicle fines.
//!
//! This crate provides the core functionality for the `finetrack` CLI tool.
//! Fines can live on this machine, on a remote fine service, or on both,
//! with changes made offline queued and replayed when the service is back.
//!
//! # Main Components
//!
//! - [`FineService`] - Mode-independent entry point for every fine operation
//! - [`storage`] - Local record store and pending-operation queue over SQLite
//! - [`sync`] - HTTP client for the fine service and the synchronizer
//! - [`Config`] - Data directory configuration (storage mode, remote section)
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use ftrs::{Workspace, commands::block_on};
//!
//! let workspace = Workspace::open(Path::new("/path/to/data"))?;
//! let service = workspace.service()?;
//! let fines = block_on(service.load_fines())??;
//! ```

mod cli;
pub mod colors;
pub mod commands;
mod display;
mod env;
pub mod help;
pub mod mode;
mod validate;

pub mod config;
pub mod error;
pub mod id;
pub mod service;
pub mod storage;
pub mod sync;
pub mod workspace;

pub use cli::{Cli, Command, DetailArgs, EditArgs, OutputFormat};
pub use config::{get_db_path, init_data_dir, resolve_data_dir, Config, RemoteConfig};
pub use env::vars as env_vars;
pub use error::{Error, Result};
pub use mode::StorageMode;
pub use service::FineService;
pub use workspace::Workspace;

use commands::add::NewFineInput;
use commands::list::ListFilter;
use commands::{block_on, today};

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());

    let command = match cli.command {
        Command::Init {
            mode,
            url,
            api_key,
            timeout_secs,
        } => return commands::init::run(&data_dir, mode, url, api_key, timeout_secs),
        other => other,
    };

    let workspace = Workspace::open(&data_dir)?;
    let service = workspace.service()?;
    block_on(dispatch(&workspace, &service, command))?
}

async fn dispatch(workspace: &Workspace, service: &FineService, command: Command) -> Result<()> {
    match command {
        // Handled before the workspace is opened
        Command::Init { .. } => Ok(()),
        Command::Add {
            fine_type,
            title,
            amount,
            due,
            issued,
            description,
            status,
            details,
            output,
        } => {
            let input = NewFineInput {
                fine_type,
                title,
                amount,
                due,
                issued,
                description,
                status,
                details,
            };
            commands::add::run(service, input, today(), output).await
        }
        Command::List {
            status,
            fine_type,
            overdue,
            output,
        } => {
            let filter = ListFilter {
                status,
                fine_type,
                overdue,
            };
            commands::list::run(service, filter, today(), output).await
        }
        Command::Show { id, output } => commands::show::run(service, &id, today(), output).await,
        Command::Edit { id, fields } => commands::edit::run(service, &id, &fields).await,
        Command::Pay { ids } => commands::edit::pay(service, &ids).await,
        Command::Delete { ids } => commands::delete::run(service, &ids).await,
        Command::Sync { output } => commands::sync::run(service, output).await,
        Command::Status { output } => {
            commands::status::run(
                service,
                workspace.config.remote_url(),
                &workspace.data_dir,
                output,
            )
            .await
        }
    }
}
