//! CLI argument parsing for cftoken.
//!
//! This module defines the command-line interface using clap.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use securefmt::Debug;

/// Default deadline for the whole generate operation, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const AFTER_HELP: &str = "\
Configuration file (first found):
  --config <PATH>
  ~/.cftoken/config.toml
  ./config.toml

Example configuration:
  api_token = \"your-cloudflare-api-token\"
  zone = \"example.com\"

Example:
  Zone: example.com
  Command: cftoken generate service
  Token name: service.example.com";

/// Main CLI structure.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "A CLI generator for Cloudflare API tokens with DNS edit permissions",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Global arguments shared across all commands.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Global arguments available to all commands.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Path to the configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Give up after this many seconds.
    #[arg(long, global = true, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new Cloudflare API token.
    Generate(GenerateArgs),
}

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Service name, used as the token name prefix.
    pub service_name: String,

    /// Cloudflare API token.
    #[arg(short, long, env = "CF_API_TOKEN", hide_env_values = true)]
    #[sensitive]
    pub token: Option<String>,

    /// Cloudflare zone name.
    #[arg(short, long, env = "CF_ZONE")]
    pub zone: Option<String>,
}
