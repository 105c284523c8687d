use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{InspectionRecord, ScaleRecord, WeighbridgeRecord};

use crate::services::open_data::fetch_records;

pub struct DatasetSpec {
    pub name: &'static str,
    pub url_var: &'static str,
    pub output_file: &'static str,
}

pub const SCALES: DatasetSpec = DatasetSpec {
    name: "scale",
    url_var: "SCALE_DATA_URL",
    output_file: "scale-data.json",
};

pub const WEIGHBRIDGES: DatasetSpec = DatasetSpec {
    name: "weighbridge",
    url_var: "WEIGHBRIDGE_DATA_URL",
    output_file: "weighbridge-data.json",
};

#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub name: &'static str,
    pub kept: usize,
    pub skipped: usize,
}

pub async fn refresh_scales() -> anyhow::Result<DatasetSummary> {
    refresh_dataset::<ScaleRecord>(&SCALES).await
}

pub async fn refresh_weighbridges() -> anyhow::Result<DatasetSummary> {
    refresh_dataset::<WeighbridgeRecord>(&WEIGHBRIDGES).await
}

/// Refreshes both datasets; one failing does not stop the other.
pub async fn refresh_all() -> anyhow::Result<()> {
    let (scales, weighbridges) =
        futures::future::join(refresh_scales(), refresh_weighbridges()).await;

    let mut summaries = Vec::new();
    for outcome in [scales, weighbridges] {
        match outcome {
            Ok(summary) => summaries.push(summary),
            Err(e) => println!("Error refreshing dataset: {e:#}"),
        }
    }

    if summaries.is_empty() {
        return Err(anyhow::anyhow!("No dataset could be refreshed"));
    }

    write_manifest(&summaries).await
}

async fn refresh_dataset<R>(spec: &DatasetSpec) -> anyhow::Result<DatasetSummary>
where
    R: InspectionRecord + Serialize + DeserializeOwned,
{
    let url = env::var(spec.url_var).with_context(|| format!("{} must be set", spec.url_var))?;

    println!("Fetching {} dataset...", spec.name);
    let records: Vec<R> = fetch_records(&url)
        .await
        .with_context(|| format!("Fetching the {} dataset failed", spec.name))?;

    let progress = ProgressBar::new(records.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("##-"),
    );
    let (kept, skipped) = partition_positioned(records, &progress);
    progress.finish_and_clear();

    let path = output_path(spec.output_file);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, serde_json::to_string_pretty(&kept)?).await?;

    println!(
        "{}: kept {} records, skipped {} without usable coordinates -> {}",
        spec.name,
        kept.len(),
        skipped,
        path.display()
    );

    Ok(DatasetSummary {
        name: spec.name,
        kept: kept.len(),
        skipped,
    })
}

// A record the map can never draw or distance-match is dropped at ingestion
// time rather than shipped to the client.
fn partition_positioned<R: InspectionRecord>(
    records: Vec<R>,
    progress: &ProgressBar,
) -> (Vec<R>, usize) {
    let mut kept = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for record in records {
        progress.inc(1);
        if record.position().is_some() {
            kept.push(record);
        } else {
            skipped += 1;
        }
    }
    (kept, skipped)
}

async fn write_manifest(summaries: &[DatasetSummary]) -> anyhow::Result<()> {
    let manifest = serde_json::json!({
        "refreshed_at": Utc::now().to_rfc3339(),
        "datasets": summaries,
    });
    let path = output_path("manifest.json");
    tokio::fs::write(&path, serde_json::to_string_pretty(&manifest)?).await?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn output_path(file_name: &str) -> PathBuf {
    let output_dir = env::var("OUTPUT_DIR").unwrap_or_else(|_| "web/public/data".to_string());
    Path::new(&output_dir).join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positioned(lat: f64, lng: f64) -> ScaleRecord {
        ScaleRecord {
            latitude: Some(lat),
            longitude: Some(lng),
            ..Default::default()
        }
    }

    #[test]
    fn partition_keeps_order_and_counts_skips() {
        let records = vec![
            positioned(25.0, 121.5),
            ScaleRecord::default(),
            positioned(24.8, 121.0),
        ];

        let progress = ProgressBar::hidden();
        let (kept, skipped) = partition_positioned(records, &progress);

        assert_eq!(skipped, 1);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].latitude, Some(25.0));
        assert_eq!(kept[1].latitude, Some(24.8));
    }

    #[test]
    fn partition_of_empty_input_is_empty() {
        let progress = ProgressBar::hidden();
        let (kept, skipped) = partition_positioned(Vec::<ScaleRecord>::new(), &progress);
        assert!(kept.is_empty());
        assert_eq!(skipped, 0);
    }
}
