//! Cloudflare implementation of [`ProviderApi`].
//!
//! Zone listing goes through the `cloudflare` crate's own endpoint. The crate
//! has no endpoint for creating user API tokens, so [`CreateUserToken`] fills
//! that gap.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use cloudflare::{
    endpoints::zones::zone::{ListZones, ListZonesParams},
    framework::{
        auth,
        client::{async_api, ClientConfig},
        endpoint::{spec::EndpointSpec, Method, RequestBody},
        response::{ApiResult, ApiSuccess},
        Environment,
    },
};
use tracing::debug;

use crate::{
    api::{IssuedToken, ProviderApi, Zone},
    error::ProviderError,
    token::TokenRequest,
};

impl ApiResult for IssuedToken {}

/// `POST /user/tokens`
#[derive(Debug)]
pub struct CreateUserToken {
    body: String,
}

impl CreateUserToken {
    /// Serializes `request` into the endpoint body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be serialized to JSON.
    pub fn new(request: &TokenRequest) -> Result<Self, ProviderError> {
        Ok(Self {
            body: serde_json::to_string(request)?,
        })
    }
}

impl EndpointSpec for CreateUserToken {
    type JsonResponse = IssuedToken;
    type ResponseType = ApiSuccess<Self::JsonResponse>;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "user/tokens".to_string()
    }

    #[inline]
    fn body(&self) -> Option<RequestBody<'_>> {
        Some(RequestBody::Json(self.body.clone()))
    }
}

/// Cloudflare API client authenticated with a user API token.
pub struct CloudflareClient {
    inner: async_api::Client,
}

impl CloudflareClient {
    /// Creates a client for the production Cloudflare API.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingCredentials`] if `api_token` is empty,
    /// or [`ProviderError::Client`] if the HTTP client cannot be built.
    pub fn new(api_token: &str) -> Result<Self, ProviderError> {
        if api_token.is_empty() {
            return Err(ProviderError::MissingCredentials);
        }

        let inner = async_api::Client::new(
            auth::Credentials::UserAuthToken {
                token: api_token.to_string(),
            },
            ClientConfig::default(),
            Environment::Production,
        )
        .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl ProviderApi for CloudflareClient {
    async fn list_zones(&self, name: &str) -> Result<Vec<Zone>, ProviderError> {
        let request = ListZones {
            params: ListZonesParams {
                name: Some(name.to_string()),
                ..Default::default()
            },
        };
        debug!("Listing zones named {name}");

        let response = self.inner.request(&request).await?;

        Ok(response
            .result
            .into_iter()
            .map(|zone| Zone {
                id: zone.id,
                name: zone.name,
            })
            .collect())
    }

    async fn create_api_token(
        &self,
        request: &TokenRequest,
    ) -> Result<IssuedToken, ProviderError> {
        let endpoint = CreateUserToken::new(request)?;
        debug!("Create token request: {endpoint:?}");

        Ok(self.inner.request(&endpoint).await?.result)
    }
}
