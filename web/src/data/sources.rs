#[cfg(feature = "ssr")]
use shared_types::{InspectionRecord, ScaleRecord, WeighbridgeRecord};
#[cfg(feature = "ssr")]
use thiserror::Error;

#[cfg(feature = "ssr")]
pub const SCALE_DATA_FILE: &str = "scale-data.json";
#[cfg(feature = "ssr")]
pub const WEIGHBRIDGE_DATA_FILE: &str = "weighbridge-data.json";

#[cfg(feature = "ssr")]
#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset request failed: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("dataset file unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset payload malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Reads a dataset either from `WEIGHMAP_DATA_BASE_URL` or, when unset, from
/// the bundled files under the assets directory.
#[cfg(feature = "ssr")]
async fn read_dataset(file_name: &str) -> Result<String, DataError> {
    if let Ok(base) = std::env::var("WEIGHMAP_DATA_BASE_URL") {
        let url = format!("{}/{}", base.trim_end_matches('/'), file_name);
        let response = reqwest::get(&url).await?.error_for_status()?;
        return Ok(response.text().await?);
    }

    // cargo leptos runs the server from web/, a plain cargo run from the
    // workspace root; accept either layout.
    let local = std::path::Path::new("public/data").join(file_name);
    match tokio::fs::read_to_string(&local).await {
        Ok(body) => Ok(body),
        Err(_) => Ok(tokio::fs::read_to_string(
            std::path::Path::new("web/public/data").join(file_name),
        )
        .await?),
    }
}

#[cfg(feature = "ssr")]
pub async fn load_scales() -> Result<Vec<ScaleRecord>, DataError> {
    let body = read_dataset(SCALE_DATA_FILE).await?;
    let records: Vec<ScaleRecord> = serde_json::from_str(&body)?;
    Ok(retain_positioned(records, "scale"))
}

#[cfg(feature = "ssr")]
pub async fn load_weighbridges() -> Result<Vec<WeighbridgeRecord>, DataError> {
    let body = read_dataset(WEIGHBRIDGE_DATA_FILE).await?;
    let records: Vec<WeighbridgeRecord> = serde_json::from_str(&body)?;
    Ok(retain_positioned(records, "weighbridge"))
}

// A record without usable coordinates can never be drawn or distance-matched;
// dropping it here keeps every downstream count honest.
#[cfg(feature = "ssr")]
fn retain_positioned<R: InspectionRecord>(records: Vec<R>, dataset: &str) -> Vec<R> {
    let total = records.len();
    let positioned: Vec<R> = records
        .into_iter()
        .filter(|record| record.position().is_some())
        .collect();

    let skipped = total - positioned.len();
    if skipped > 0 {
        tracing::warn!(dataset, skipped, total, "dropped records without usable coordinates");
    }
    tracing::info!(dataset, count = positioned.len(), "dataset loaded");

    positioned
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn retain_positioned_drops_only_unusable_records() {
        let records = vec![
            ScaleRecord {
                latitude: Some(25.0),
                longitude: Some(121.5),
                ..Default::default()
            },
            ScaleRecord {
                latitude: None,
                longitude: Some(121.5),
                ..Default::default()
            },
            ScaleRecord {
                latitude: Some(24.8),
                longitude: Some(121.0),
                ..Default::default()
            },
        ];

        let kept = retain_positioned(records, "scale");
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.position().is_some()));
    }
}
