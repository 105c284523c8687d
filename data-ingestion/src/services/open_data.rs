// Thin client for the authority's open-data endpoints. Each dataset is a
// plain JSON array download; no paging, no auth.

use anyhow::Context;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

static HTTP: Lazy<Client> = Lazy::new(Client::new);

pub async fn fetch_records<T: DeserializeOwned>(raw_url: &str) -> anyhow::Result<Vec<T>> {
    let url = Url::parse(raw_url).with_context(|| format!("Invalid dataset url: {raw_url}"))?;

    let response = HTTP.get(url.clone()).send().await?;
    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "HTTP error {} from {}",
            response.status(),
            url
        ));
    }

    response
        .json()
        .await
        .with_context(|| format!("Malformed dataset payload from {url}"))
}
