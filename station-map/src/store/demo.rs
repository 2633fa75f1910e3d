//! Demo write path: create, update and delete against the cached copy.
//!
//! Every write starts from the dataset, not from the cache, and replaces the
//! cached copy with the result. The dataset itself is never modified.

use tracing::info;

use crate::domain::{Station, StationPatch};

use super::StationStore;
use super::error::StoreError;

/// Seed the store with the dataset unless it already holds a copy.
///
/// Returns `true` if the store was written.
pub fn seed_if_empty(store: &dyn StationStore, dataset: &[Station]) -> Result<bool, StoreError> {
    if store.get()?.is_some() {
        return Ok(false);
    }
    store.set(dataset)?;
    info!(count = dataset.len(), "seeded station cache");
    Ok(true)
}

/// The cached copy, or the dataset if nothing has been written yet.
pub fn current(store: &dyn StationStore, dataset: &[Station]) -> Result<Vec<Station>, StoreError> {
    Ok(store.get()?.unwrap_or_else(|| dataset.to_vec()))
}

/// Append a station to the dataset and cache the result.
pub fn create_station(
    store: &dyn StationStore,
    dataset: &[Station],
    station: Station,
) -> Result<Vec<Station>, StoreError> {
    station.validate()?;

    let mut stations = dataset.to_vec();
    let name = station.name.clone();
    stations.push(station);
    store.set(&stations)?;

    info!(name = %name, "station added");
    Ok(stations)
}

/// Merge `patch` into every station called `name` and cache the result.
///
/// An unknown name caches the dataset unchanged.
pub fn update_station(
    store: &dyn StationStore,
    dataset: &[Station],
    name: &str,
    patch: &StationPatch,
) -> Result<Vec<Station>, StoreError> {
    patch.validate()?;

    let mut stations = dataset.to_vec();
    let mut updated = 0;
    for station in stations.iter_mut().filter(|s| s.name == name) {
        station.apply(patch);
        updated += 1;
    }
    store.set(&stations)?;

    info!(name, updated, "station updated");
    Ok(stations)
}

/// Remove every station called `name` and cache the result.
pub fn delete_station(
    store: &dyn StationStore,
    dataset: &[Station],
    name: &str,
) -> Result<Vec<Station>, StoreError> {
    let mut stations = dataset.to_vec();
    let before = stations.len();
    stations.retain(|s| s.name != name);
    store.set(&stations)?;

    info!(name, removed = before - stations.len(), "station deleted");
    Ok(stations)
}
