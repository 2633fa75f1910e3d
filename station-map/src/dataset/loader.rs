//! One-shot dataset loading.

use std::time::Duration;

use tracing::info;

use crate::domain::Station;

use super::error::DatasetError;
use super::source::{BUNDLED_DATASET, DatasetSource};

/// Request timeout for remote datasets.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Load the station list from `source`.
pub async fn load(source: &DatasetSource) -> Result<Vec<Station>, DatasetError> {
    let stations = match source {
        DatasetSource::Bundled => parse(BUNDLED_DATASET)?,
        DatasetSource::File(path) => {
            let contents =
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| DatasetError::Io {
                        path: path.clone(),
                        source: e,
                    })?;
            parse(&contents)?
        }
        DatasetSource::Url(url) => fetch(url).await?,
    };

    info!(source = %source, count = stations.len(), "loaded station dataset");
    Ok(stations)
}

/// The dataset compiled into the binary.
pub fn bundled() -> Result<Vec<Station>, DatasetError> {
    parse(BUNDLED_DATASET)
}

/// Parse a JSON array of station records.
pub fn parse(json: &str) -> Result<Vec<Station>, DatasetError> {
    serde_json::from_str(json).map_err(|e| DatasetError::Json {
        message: e.to_string(),
    })
}

async fn fetch(url: &str) -> Result<Vec<Station>, DatasetError> {
    let http = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    let response = http.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DatasetError::Status {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;
    parse(&body)
}
