//! Errors raised by the CLI before or around token generation.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// No API token from flag, environment or config file.
    #[error("api_token must be provided")]
    MissingCredentials,

    /// No zone from flag, environment or config file.
    #[error("missing required zone in config")]
    MissingZone,

    /// The operation did not finish before the deadline.
    #[error("timed out after {0}s")]
    TimedOut(u64),
}
