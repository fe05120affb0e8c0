//! Client creation utilities for cftoken.

#![forbid(unsafe_code)]

use cftoken_lib::{CloudflareClient, ProviderError};

use crate::config::Settings;

/// Creates a Cloudflare API client.
///
/// # Errors
///
/// Returns an error if the client cannot be created with the provided credentials.
pub fn create_cloudflare_client(settings: &Settings) -> Result<CloudflareClient, ProviderError> {
    CloudflareClient::new(&settings.api_token)
}
