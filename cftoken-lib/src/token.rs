//! API token issuance.
//!
//! Builds the fixed Zone Read + DNS Write policy for a single zone and asks
//! the provider to create a token with it.

#![forbid(unsafe_code)]

use std::{collections::BTreeMap, io::Write};

use serde::Serialize;
use tracing::{debug, info};

use crate::{api::ProviderApi, error::TokenError, zone::resolve_zone_id};

/// Permission group ID for "Zone Read".
pub const ZONE_READ_PERMISSION: &str = "c8fed203ed3043cba015a93ad1616f1f";

/// Permission group ID for "DNS Write".
pub const DNS_WRITE_PERMISSION: &str = "4755a26eedb94da69e1066d98aa820be";

/// Resource key prefix for a zone. The zone ID is appended after a `.`.
pub const ZONE_RESOURCE_PREFIX: &str = "com.cloudflare.api.account.zone";

/// Payload for a token creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRequest {
    /// Token name, `<service_name>.<zone_name>`.
    pub name: String,
    /// Always exactly one policy.
    pub policies: Vec<Policy>,
}

/// A single access policy attached to a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    /// Whether the policy grants or denies access.
    pub effect: PolicyEffect,
    /// Permission groups granted, in request order.
    pub permission_groups: Vec<PermissionGroup>,
    /// Resource key to scope value, e.g. `com.cloudflare.api.account.zone.<id>` to `*`.
    pub resources: BTreeMap<String, String>,
}

/// Effect of a [`Policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyEffect {
    /// Grant the listed permissions.
    Allow,
}

/// Reference to a provider-defined permission group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionGroup {
    /// Opaque permission group ID.
    pub id: String,
}

impl TokenRequest {
    /// Creates the request for `<service_name>.<zone_name>`, scoped to `zone_id`.
    #[must_use]
    pub fn new(service_name: &str, zone_name: &str, zone_id: &str) -> Self {
        Self {
            name: token_name(service_name, zone_name),
            policies: vec![Policy::dns_write(zone_id)],
        }
    }
}

impl Policy {
    /// Allows reading the zone and writing its DNS records, nothing else.
    #[must_use]
    pub fn dns_write(zone_id: &str) -> Self {
        let resources = BTreeMap::from([(
            format!("{ZONE_RESOURCE_PREFIX}.{zone_id}"),
            "*".to_string(),
        )]);

        Self {
            effect: PolicyEffect::Allow,
            permission_groups: vec![
                PermissionGroup {
                    id: ZONE_READ_PERMISSION.to_string(),
                },
                PermissionGroup {
                    id: DNS_WRITE_PERMISSION.to_string(),
                },
            ],
            resources,
        }
    }
}

/// Name given to the token: `<service_name>.<zone_name>`.
#[must_use]
pub fn token_name(service_name: &str, zone_name: &str) -> String {
    format!("{service_name}.{zone_name}")
}

/// Generates a Zone Read + DNS Write token for `service_name` on `zone_name`.
///
/// A `Generating API token: <name>` line is written to `progress` before the
/// creation request is sent, so it appears even when that request fails.
///
/// Returns the secret value of the new token.
///
/// # Errors
///
/// Returns an error if:
/// - The zone cannot be resolved to exactly one zone ID
/// - The progress line cannot be written
/// - The token creation request fails
pub async fn generate_token<W>(
    api: &dyn ProviderApi,
    service_name: &str,
    zone_name: &str,
    progress: &mut W,
) -> Result<String, TokenError>
where
    W: Write + ?Sized,
{
    let zone_id = resolve_zone_id(api, zone_name).await?;
    let request = TokenRequest::new(service_name, zone_name, &zone_id);
    debug!("Token request: {request:?}");

    writeln!(progress, "Generating API token: {}", request.name)?;

    let token = api
        .create_api_token(&request)
        .await
        .map_err(TokenError::CreateTokenFailed)?;
    info!("Created API token {} (ID: {})", token.name, token.id);

    Ok(token.value)
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::{
        error::{ProviderError, ZoneError},
        test_utils::MockProvider,
    };

    #[test]
    fn test_token_request_shape() {
        let request = TokenRequest::new("test-service", "example.com", "zone-id-123");

        assert_eq!(request.name, "test-service.example.com");
        assert_eq!(request.policies.len(), 1);

        let policy = &request.policies[0];
        assert_eq!(policy.effect, PolicyEffect::Allow);
        assert_eq!(
            policy.permission_groups,
            vec![
                PermissionGroup {
                    id: ZONE_READ_PERMISSION.to_string()
                },
                PermissionGroup {
                    id: DNS_WRITE_PERMISSION.to_string()
                },
            ]
        );
        assert_eq!(policy.resources.len(), 1);
        assert_eq!(
            policy
                .resources
                .get("com.cloudflare.api.account.zone.zone-id-123")
                .map(String::as_str),
            Some("*")
        );
    }

    #[test]
    fn test_token_request_json() {
        let request = TokenRequest::new("svc", "example.com", "abc");
        let json = serde_json::to_value(&request).expect("Should serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "name": "svc.example.com",
                "policies": [{
                    "effect": "allow",
                    "permission_groups": [
                        { "id": ZONE_READ_PERMISSION },
                        { "id": DNS_WRITE_PERMISSION },
                    ],
                    "resources": {
                        "com.cloudflare.api.account.zone.abc": "*",
                    },
                }],
            })
        );
    }

    #[test]
    fn test_token_name_is_plain_concatenation() {
        assert_eq!(token_name("My-Service", "example.com"), "My-Service.example.com");
    }

    #[tokio::test]
    async fn test_generate_token_success() {
        let api = MockProvider::with_zones(&[("zone-id-123", "example.com")]).with_token("abc123");
        let mut progress = Vec::new();

        let value = generate_token(&api, "test-service", "example.com", &mut progress)
            .await
            .expect("Should generate token");

        assert_eq!(value, "abc123");
        assert_eq!(
            String::from_utf8(progress).expect("Should be UTF-8"),
            "Generating API token: test-service.example.com\n"
        );

        let requests = api.token_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            TokenRequest::new("test-service", "example.com", "zone-id-123")
        );
        assert_eq!(api.listed_zone_names(), vec!["example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_generate_token_zone_not_found_skips_create() {
        let api = MockProvider::with_zones(&[]).with_token("abc123");
        let mut progress = Vec::new();

        let err = generate_token(&api, "test-service", "example.com", &mut progress)
            .await
            .expect_err("Should fail without a zone");

        assert!(matches!(
            err,
            TokenError::GetZoneIdFailed(ZoneError::ZoneNotFound { .. })
        ));
        assert!(api.token_requests().is_empty(), "Create must not be called");
        assert!(progress.is_empty(), "No progress line before resolution");
    }

    #[tokio::test]
    async fn test_generate_token_empty_zone_skips_create() {
        let api = MockProvider::with_zones(&[("unrelated-zone", "other.com")]);
        let mut progress = Vec::new();

        let err = generate_token(&api, "svc", "", &mut progress)
            .await
            .expect_err("Should fail with an empty zone name");

        assert!(matches!(
            err,
            TokenError::GetZoneIdFailed(ZoneError::EmptyZoneName)
        ));
        assert!(api.listed_zone_names().is_empty());
        assert!(api.token_requests().is_empty(), "Create must not be called");
        assert!(progress.is_empty());
    }

    #[tokio::test]
    async fn test_generate_token_multiple_zones_skips_create() {
        let api = MockProvider::with_zones(&[("a", "example.com"), ("b", "example.com")]);
        let mut progress = Vec::new();

        let err = generate_token(&api, "svc", "example.com", &mut progress)
            .await
            .expect_err("Should fail with ambiguous zone");

        assert!(matches!(
            err,
            TokenError::GetZoneIdFailed(ZoneError::MultipleZonesFound { count: 2, .. })
        ));
        assert!(api.token_requests().is_empty(), "Create must not be called");
    }

    #[tokio::test]
    async fn test_generate_token_list_failure_chain() {
        let api = MockProvider::failing_list("connection reset");
        let mut progress = Vec::new();

        let err = generate_token(&api, "svc", "example.com", &mut progress)
            .await
            .expect_err("Should fail when listing fails");

        let zone_err = err.source().expect("Should have a zone error source");
        let provider_err = zone_err.source().expect("Should have a provider source");
        assert_eq!(provider_err.to_string(), "connection reset");
        assert!(api.token_requests().is_empty(), "Create must not be called");
    }

    #[tokio::test]
    async fn test_generate_token_create_failure() {
        let api = MockProvider::with_zones(&[("zone-id-123", "example.com")])
            .failing_create("permission denied");
        let mut progress = Vec::new();

        let err = generate_token(&api, "test-service", "example.com", &mut progress)
            .await
            .expect_err("Should fail when create fails");

        match &err {
            TokenError::CreateTokenFailed(ProviderError::Unexpected(msg)) => {
                assert_eq!(msg, "permission denied");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("permission denied".to_string())
        );
        assert_eq!(
            String::from_utf8(progress).expect("Should be UTF-8"),
            "Generating API token: test-service.example.com\n",
            "Progress line is written before the create call"
        );
        assert_eq!(api.token_requests().len(), 1);
    }
}
