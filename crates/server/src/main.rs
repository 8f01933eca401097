// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! finetrack-server binary.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use finetrack_server::ServerState;

/// finetrack-server: fine collection service for finetrack clients
#[derive(Parser, Debug)]
#[command(name = "finetrack-server")]
#[command(about = "HTTP service holding the canonical fine collection")]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1:3001")]
    bind: SocketAddr,

    /// JSON file to load the collection from and persist it to
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Require this bearer token on every fines request
    #[arg(long, env = "FINETRACK_SERVER_API_KEY")]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting finetrack-server");
    info!("  Bind address: {}", args.bind);
    match &args.data {
        Some(path) => info!("  Data file: {}", path.display()),
        None => info!("  Data file: none (in-memory)"),
    }
    if args.api_key.is_some() {
        info!("  Auth: bearer token required");
    }

    let state = ServerState::open(args.data.as_deref(), args.api_key)?;
    finetrack_server::run(args.bind, state).await?;

    Ok(())
}
