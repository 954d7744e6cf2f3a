//! HTTP retrieval of the source CSVs.

use std::time::Duration;

use dashboard_core::{Error, Result};
use tracing::{debug, warn};

/// Thin HTTP client for the Load phase. Every failure maps to
/// `DataUnavailable`: there is no dashboard without data, and the
/// caller fails fast rather than rendering partially.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Fetches one CSV resource as raw bytes.
    pub async fn fetch(&self, name: &str, url: &str) -> Result<Vec<u8>> {
        debug!(table = name, url = %url, "Fetching source table");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(table = name, error = %e, "Source fetch failed");
            Error::data_unavailable(format!("{}: fetch failed: {}", name, e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(table = name, status = %status, "Source returned error status");
            return Err(Error::data_unavailable(format!(
                "{}: source returned {}",
                name, status
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            Error::data_unavailable(format!("{}: failed to read body: {}", name, e))
        })?;

        Ok(bytes.to_vec())
    }
}
