//! The provider capability the core depends on.
//!
//! [`ProviderApi`] performs the two remote calls needed to issue a token.
//! [`CloudflareClient`](crate::client::CloudflareClient) implements it against
//! the real API; tests supply their own implementation.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use securefmt::Debug;
use serde::Deserialize;

use crate::{error::ProviderError, token::TokenRequest};

/// A DNS zone known to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// A freshly created API token.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuedToken {
    pub id: String,
    pub name: String,
    /// The secret. Only returned once, at creation time.
    #[sensitive]
    pub value: String,
}

/// Remote operations required to issue a zone-scoped token.
#[async_trait]
pub trait ProviderApi: Send + Sync {
    /// Lists the zones whose name matches `name`.
    async fn list_zones(&self, name: &str) -> Result<Vec<Zone>, ProviderError>;

    /// Creates an API token from `request`.
    async fn create_api_token(&self, request: &TokenRequest)
        -> Result<IssuedToken, ProviderError>;
}
