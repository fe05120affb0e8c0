//! cftoken CLI - Cloudflare API token generator
//!
//! Creates API tokens limited to reading one zone and editing its DNS records.

#![forbid(unsafe_code)]

use std::io;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::debug;

use cli::{Cli, Command};

mod cli;
mod clients;
mod commands;
mod config;
mod error;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    debug!("CLI args: {cli:?}");

    match &cli.command {
        Command::Generate(args) => commands::generate(&cli.global, args).await,
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr; stdout only carries the progress line and the token.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
