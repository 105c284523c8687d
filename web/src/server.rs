use leptos::prelude::*;
use leptos::server;
use shared_types::{ScaleRecord, WeighbridgeRecord};

#[server]
pub async fn fetch_scale_records() -> Result<Vec<ScaleRecord>, ServerFnError> {
    match crate::data::store::get_store() {
        Ok(store) => Ok(store.scales.clone()),
        Err(e) => Err(ServerFnError::new(format!("Dataset store error: {}", e))),
    }
}

#[server]
pub async fn fetch_weighbridge_records() -> Result<Vec<WeighbridgeRecord>, ServerFnError> {
    match crate::data::store::get_store() {
        Ok(store) => Ok(store.weighbridges.clone()),
        Err(e) => Err(ServerFnError::new(format!("Dataset store error: {}", e))),
    }
}
