//! Configuration loading for the cftoken CLI.
//!
//! Values come from, in order of precedence: command-line flags, the
//! `CF_API_TOKEN` / `CF_ZONE` environment variables, then the config file.

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use securefmt::Debug;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::CliError;

/// Directory under the user's home that holds the config file.
pub const APP_DIR_NAME: &str = ".cftoken";

/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of the config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Cloudflare API token allowed to create other tokens.
    #[sensitive]
    pub api_token: Option<String>,
    /// Zone the generated tokens are scoped to.
    pub zone: Option<String>,
}

/// Fully resolved settings for a generate run.
#[derive(Debug, Clone)]
pub struct Settings {
    #[sensitive]
    pub api_token: String,
    pub zone: String,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config file named on the command line, or the first default
    /// location that exists.
    ///
    /// A missing or unreadable default file yields an empty config; only an
    /// explicit `--config` file must load.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file cannot be read or parsed.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, CliError> {
        Self::discover_in(explicit, &default_paths())
    }

    fn discover_in(explicit: Option<&Path>, candidates: &[PathBuf]) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            info!("Using config file: {}", path.display());
            return Ok(config);
        }

        let Some(path) = first_existing(candidates) else {
            debug!("No config file found, using flags and environment only");
            return Ok(Self::default());
        };

        match Self::load(&path) {
            Ok(config) => {
                info!("Using config file: {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Error reading config file: {e}");
                Ok(Self::default())
            }
        }
    }

    /// Merges flag/environment values over the file values.
    ///
    /// Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the API token or the zone is missing.
    pub fn resolve(
        self,
        token: Option<String>,
        zone: Option<String>,
    ) -> Result<Settings, CliError> {
        let api_token = non_empty(token)
            .or_else(|| non_empty(self.api_token))
            .ok_or(CliError::MissingCredentials)?;
        let zone = non_empty(zone)
            .or_else(|| non_empty(self.zone))
            .ok_or(CliError::MissingZone)?;

        Ok(Settings { api_token, zone })
    }
}

/// Default config file locations, most specific first.
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(dirs) = BaseDirs::new() {
        paths.push(dirs.home_dir().join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
