//! Command handlers for the cftoken CLI.
//!
//! This module contains the implementation of each CLI command,
//! keeping the main module focused on argument parsing and setup.

#![forbid(unsafe_code)]

use std::{
    io::{self, Write},
    time::Duration,
};

use cftoken_lib::{generate_token, ProviderApi};
use color_eyre::eyre::{Result, WrapErr};
use tracing::debug;

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    clients::create_cloudflare_client,
    config::{Config, Settings},
    error::CliError,
};

/// Generates a token and prints its value to stdout.
pub async fn generate(global: &GlobalArgs, args: &GenerateArgs) -> Result<()> {
    let settings = Config::discover(global.config.as_deref())?
        .resolve(args.token.clone(), args.zone.clone())?;
    debug!("Settings resolved: {settings:?}");

    let client = create_cloudflare_client(&settings)?;

    let mut stdout = io::stdout();
    let value = run_generate(
        &client,
        &args.service_name,
        &settings,
        Duration::from_secs(global.timeout),
        &mut stdout,
    )
    .await?;

    writeln!(stdout, "{value}")?;
    Ok(())
}

/// Runs token generation against `api` with a deadline.
///
/// The service name is lower-cased before use.
async fn run_generate<W>(
    api: &dyn ProviderApi,
    service_name: &str,
    settings: &Settings,
    timeout: Duration,
    out: &mut W,
) -> Result<String>
where
    W: Write + ?Sized,
{
    let service_name = service_name.to_lowercase();
    tokio::time::timeout(
        timeout,
        generate_token(api, &service_name, &settings.zone, out),
    )
    .await
    .map_err(|_| CliError::TimedOut(timeout.as_secs()))?
    .wrap_err("failed to generate token")
}
