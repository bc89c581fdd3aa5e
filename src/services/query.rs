use tracing::debug;

use crate::{
    error::AppError,
    models::destination::TripDetail,
    services::{
        api::TravelClient,
        cache::{QueryCache, QueryKey},
    },
};

/// Read a trip's detail view through the cache: a fresh entry is served as it
/// is, a stale or missing one is refetched and stored.
pub async fn load_trip_detail<C: TravelClient>(
    client: &C,
    cache: &QueryCache,
    trip_id: &str,
) -> Result<TripDetail, AppError> {
    let key = QueryKey::detail_destination(trip_id);
    if let Some(value) = cache.fresh(&key) {
        let detail = serde_json::from_value(value).map_err(|err| AppError::Other(err.into()))?;
        return Ok(detail);
    }

    debug!(trip_id, "trip detail missing or stale, fetching");
    let detail = client.trip_detail(trip_id).await?;
    let value = serde_json::to_value(&detail).map_err(|err| AppError::Other(err.into()))?;
    cache.put(key, value);
    Ok(detail)
}
