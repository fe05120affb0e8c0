//! cftoken library - scoped Cloudflare API tokens
//!
//! Creates API tokens that may read a single zone and edit its DNS records.
//!
//! # Overview
//!
//! Token generation is two sequential API calls: the zone name is resolved to
//! exactly one zone ID, then a token named `<service>.<zone>` is created with
//! a fixed Zone Read + DNS Write policy on that zone.
//!
//! # Modules
//!
//! - [`api`]: The [`ProviderApi`] capability and the values it returns
//! - [`client`]: [`ProviderApi`] backed by the Cloudflare API
//! - [`error`]: Error types for each step
//! - [`token`]: Token request construction and issuance
//! - [`zone`]: Zone name resolution
//!
//! # Example
//!
//! ```ignore
//! use cftoken_lib::{generate_token, CloudflareClient};
//!
//! let client = CloudflareClient::new(&api_token)?;
//! let value = generate_token(&client, "backup", "example.com", &mut std::io::stdout()).await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod token;
pub mod zone;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types at the crate root
pub use api::{IssuedToken, ProviderApi, Zone};
pub use client::CloudflareClient;
pub use error::{ProviderError, TokenError, ZoneError};
pub use token::{
    generate_token, TokenRequest, DNS_WRITE_PERMISSION, ZONE_READ_PERMISSION,
    ZONE_RESOURCE_PREFIX,
};
pub use zone::resolve_zone_id;
