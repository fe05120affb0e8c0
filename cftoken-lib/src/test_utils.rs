//! Test doubles for the provider API.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    api::{IssuedToken, ProviderApi, Zone},
    error::ProviderError,
    token::TokenRequest,
};

/// A [`ProviderApi`] with canned responses that records every call.
pub struct MockProvider {
    zones: Result<Vec<Zone>, String>,
    token: Result<String, String>,
    listed: Mutex<Vec<String>>,
    requests: Mutex<Vec<TokenRequest>>,
}

impl MockProvider {
    /// Returns `(id, name)` zones for every listing.
    pub fn with_zones(zones: &[(&str, &str)]) -> Self {
        Self {
            zones: Ok(zones
                .iter()
                .map(|(id, name)| Zone {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                })
                .collect()),
            token: Ok("mock-token-value".to_string()),
            listed: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every listing with `message`.
    pub fn failing_list(message: &str) -> Self {
        Self {
            zones: Err(message.to_string()),
            ..Self::with_zones(&[])
        }
    }

    pub fn with_token(mut self, value: &str) -> Self {
        self.token = Ok(value.to_string());
        self
    }

    pub fn failing_create(mut self, message: &str) -> Self {
        self.token = Err(message.to_string());
        self
    }

    /// Zone names passed to `list_zones`, in call order.
    pub fn listed_zone_names(&self) -> Vec<String> {
        self.listed.lock().expect("lock poisoned").clone()
    }

    /// Requests passed to `create_api_token`, in call order.
    pub fn token_requests(&self) -> Vec<TokenRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl ProviderApi for MockProvider {
    async fn list_zones(&self, name: &str) -> Result<Vec<Zone>, ProviderError> {
        self.listed
            .lock()
            .expect("lock poisoned")
            .push(name.to_string());
        self.zones.clone().map_err(ProviderError::Unexpected)
    }

    async fn create_api_token(
        &self,
        request: &TokenRequest,
    ) -> Result<IssuedToken, ProviderError> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(request.clone());
        let value = self.token.clone().map_err(ProviderError::Unexpected)?;
        Ok(IssuedToken {
            id: "mock-token-id".to_string(),
            name: request.name.clone(),
            value,
        })
    }
}
