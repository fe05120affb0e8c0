//! Zone name resolution.

#![forbid(unsafe_code)]

use tracing::{debug, warn};

use crate::{api::ProviderApi, error::ZoneError};

/// Resolves `zone_name` to the ID of the single zone matching it.
///
/// The lookup is always sent to the provider; results are not cached.
///
/// # Errors
///
/// Returns an error if:
/// - `zone_name` is empty
/// - The zone listing request fails
/// - No zone matches the name
/// - More than one zone matches the name
pub async fn resolve_zone_id(
    api: &dyn ProviderApi,
    zone_name: &str,
) -> Result<String, ZoneError> {
    if zone_name.is_empty() {
        return Err(ZoneError::EmptyZoneName);
    }

    debug!("Looking up zone ID for {zone_name}");
    let zones = api
        .list_zones(zone_name)
        .await
        .map_err(ZoneError::ListZonesFailed)?;

    match zones.as_slice() {
        [] => Err(ZoneError::ZoneNotFound {
            zone: zone_name.to_string(),
        }),
        [zone] => {
            debug!("Found zone {} (ID: {})", zone.name, zone.id);
            Ok(zone.id.clone())
        }
        _ => {
            warn!("{} zones match {zone_name}, refusing to pick one", zones.len());
            Err(ZoneError::MultipleZonesFound {
                zone: zone_name.to_string(),
                count: zones.len(),
            })
        }
    }
}
