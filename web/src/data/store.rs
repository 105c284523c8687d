#[cfg(feature = "ssr")]
use chrono::{DateTime, Utc};
#[cfg(feature = "ssr")]
use shared_types::{ScaleRecord, WeighbridgeRecord};
#[cfg(feature = "ssr")]
use std::sync::OnceLock;
#[cfg(feature = "ssr")]
use thiserror::Error;

#[cfg(feature = "ssr")]
use crate::data::sources;

#[cfg(feature = "ssr")]
static STORE: OnceLock<DatasetStore> = OnceLock::new();

/// Write-once cache of both inspection datasets, filled at startup and held
/// for the lifetime of the process.
#[cfg(feature = "ssr")]
#[derive(Debug)]
pub struct DatasetStore {
    pub scales: Vec<ScaleRecord>,
    pub weighbridges: Vec<WeighbridgeRecord>,
    pub refreshed_at: DateTime<Utc>,
}

#[cfg(feature = "ssr")]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Dataset store already initialized")]
    AlreadyInitialized,
    #[error("Dataset store not initialized. Call init_store() first.")]
    Uninitialized,
}

/// Fetches both datasets concurrently. Each category fails independently: a
/// failed load is logged and that category is served as empty.
#[cfg(feature = "ssr")]
pub async fn init_store() -> Result<(), StoreError> {
    let (scales, weighbridges) =
        tokio::join!(sources::load_scales(), sources::load_weighbridges());

    let scales = scales.unwrap_or_else(|e| {
        tracing::error!(dataset = "scale", error = %e, "dataset unavailable, serving empty");
        Vec::new()
    });
    let weighbridges = weighbridges.unwrap_or_else(|e| {
        tracing::error!(dataset = "weighbridge", error = %e, "dataset unavailable, serving empty");
        Vec::new()
    });

    let store = DatasetStore {
        scales,
        weighbridges,
        refreshed_at: Utc::now(),
    };
    tracing::info!(
        scales = store.scales.len(),
        weighbridges = store.weighbridges.len(),
        refreshed_at = %store.refreshed_at,
        "dataset store ready"
    );

    STORE.set(store).map_err(|_| StoreError::AlreadyInitialized)
}

#[cfg(feature = "ssr")]
pub fn get_store() -> Result<&'static DatasetStore, StoreError> {
    STORE.get().ok_or(StoreError::Uninitialized)
}
