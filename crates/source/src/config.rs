//! Source data configuration.

use serde::{Deserialize, Serialize};

/// Where the four source tables come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Confirmed cases time series CSV
    #[serde(default = "default_cases_url")]
    pub cases_url: String,
    /// Deaths time series CSV
    #[serde(default = "default_deaths_url")]
    pub deaths_url: String,
    /// Recovered time series CSV
    #[serde(default = "default_recovered_url")]
    pub recovered_url: String,
    /// Per-country latest snapshot CSV
    #[serde(default = "default_snapshot_url")]
    pub snapshot_url: String,
    /// Fetch timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const CSSE_TIMESERIES: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series";

fn default_cases_url() -> String {
    format!("{}/time_series_covid19_confirmed_global.csv", CSSE_TIMESERIES)
}

fn default_deaths_url() -> String {
    format!("{}/time_series_covid19_deaths_global.csv", CSSE_TIMESERIES)
}

fn default_recovered_url() -> String {
    format!("{}/time_series_covid19_recovered_global.csv", CSSE_TIMESERIES)
}

fn default_snapshot_url() -> String {
    "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/web-data/data/cases_country.csv"
        .to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            cases_url: default_cases_url(),
            deaths_url: default_deaths_url(),
            recovered_url: default_recovered_url(),
            snapshot_url: default_snapshot_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
