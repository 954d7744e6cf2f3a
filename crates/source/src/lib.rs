//! Source data loading: fetches the four public CSV resources and
//! decodes them into a validated, immutable `DataContext`.
//!
//! This is the Load phase of the two-phase lifecycle. Any failure here
//! is fatal to startup; the Serve phase never touches the network.

pub mod config;
pub mod decode;
pub mod fetch;

pub use config::SourceConfig;
pub use decode::{decode_snapshot, decode_time_series};
pub use fetch::Fetcher;

use dashboard_core::{DataContext, Result};
use tracing::info;

/// Fetches, decodes, and validates all four source tables.
pub async fn load_context(config: &SourceConfig) -> Result<DataContext> {
    let fetcher = Fetcher::new(config.timeout_secs)?;

    let cases = decode_time_series("cases", &fetcher.fetch("cases", &config.cases_url).await?)?;
    let deaths =
        decode_time_series("deaths", &fetcher.fetch("deaths", &config.deaths_url).await?)?;
    let recovered = decode_time_series(
        "recovered",
        &fetcher.fetch("recovered", &config.recovered_url).await?,
    )?;
    let snapshot = decode_snapshot(&fetcher.fetch("snapshot", &config.snapshot_url).await?)?;

    info!(
        date_columns = cases.dates.len(),
        series_rows = cases.rows.len(),
        countries = snapshot.rows.len(),
        "Source tables decoded"
    );

    DataContext::new(cases, deaths, recovered, snapshot)
}
