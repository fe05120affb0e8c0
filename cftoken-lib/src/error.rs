//! Error types for token generation.
//!
//! Each step wraps the failure beneath it, so a caller can walk the
//! `source()` chain to tell a missing zone apart from a failed API call.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by a [`ProviderApi`](crate::api::ProviderApi) implementation.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No API token was supplied when building the client.
    #[error("api_token must be provided")]
    MissingCredentials,

    /// The HTTP client could not be constructed.
    #[error("failed to initialize Cloudflare client: {0}")]
    Client(String),

    /// Cloudflare API error.
    #[error("Cloudflare API error: {0}")]
    Cloudflare(#[from] cloudflare::framework::response::ApiFailure),

    /// The request body could not be serialized.
    #[error("failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other provider failure.
    #[error("{0}")]
    Unexpected(String),
}

/// Errors that can occur while resolving a zone name to its identifier.
#[derive(Error, Debug)]
pub enum ZoneError {
    /// The zone name was empty; the provider would treat it as no filter.
    #[error("zone name must not be empty")]
    EmptyZoneName,

    /// The zone listing call failed.
    #[error("failed to list zones: {0}")]
    ListZonesFailed(#[source] ProviderError),

    /// No zone matched the name.
    #[error("no zones found: {zone}")]
    ZoneNotFound {
        /// The zone name that was looked up.
        zone: String,
    },

    /// More than one zone matched the name.
    #[error("multiple zones found: {zone} ({count} matches)")]
    MultipleZonesFound {
        /// The zone name that was looked up.
        zone: String,
        /// How many zones matched.
        count: usize,
    },
}

/// Errors that can occur while generating an API token.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Zone resolution failed; no token was requested.
    #[error("failed to get zone ID: {0}")]
    GetZoneIdFailed(#[from] ZoneError),

    /// The token creation call failed.
    #[error("failed to create API token: {0}")]
    CreateTokenFailed(#[source] ProviderError),

    /// The progress notice could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
