//! Geo marker derivation for the map view.
//!
//! Each plotted row becomes one circle marker. The dataset kind carries
//! its color and tooltip shape as data, so there is no string-tag
//! dispatch anywhere downstream.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::format::group_thousands;
use crate::table::{CountrySnapshot, SnapshotTable, TimeSeriesTable};

/// Which table a map layer draws from. Each kind owns a fixed color and
/// tooltip template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Cases,
    Deaths,
    Recovered,
    /// The per-country latest snapshot ("All" tab).
    Snapshot,
}

impl DatasetKind {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Cases => "orange",
            Self::Deaths => "crimson",
            Self::Recovered => "forestgreen",
            Self::Snapshot => "deepskyblue",
        }
    }

    /// Tooltip line label for the time-series kinds.
    fn metric_label(&self) -> &'static str {
        match self {
            Self::Cases => "Confirmed",
            Self::Deaths => "Deaths",
            Self::Recovered => "Recovered",
            Self::Snapshot => "Confirmed",
        }
    }
}

/// One circle marker on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoMarker {
    pub lat: f64,
    pub long: f64,
    pub radius: f64,
    /// "state, country" when a sub-region exists, else "country".
    pub label: String,
    pub tooltip: String,
    pub color: String,
}

/// Marker radius for a count.
///
/// `2π·sqrt(count)` is deliberately non-standard scaling (not
/// proportional area), chosen for visual spread. Kept exactly for
/// compatibility with the established map rendering.
pub fn marker_radius(count: u64) -> f64 {
    2.0 * PI * (count as f64).sqrt()
}

fn place_label(state: &str, country: &str) -> String {
    if state.is_empty() {
        country.to_string()
    } else {
        format!("{}, {}", state, country)
    }
}

/// Derives markers from a time-series table, using each row's latest
/// count. Rows with a missing coordinate are skipped, not plotted and
/// not an error.
pub fn markers_from_series(kind: DatasetKind, table: &TimeSeriesTable) -> Vec<GeoMarker> {
    let color = kind.color();
    let metric = kind.metric_label();
    table
        .rows
        .iter()
        .filter_map(|row| {
            let (lat, long) = (row.lat?, row.long?);
            let count = TimeSeriesTable::latest_count(row);
            let label = place_label(&row.state, &row.country);
            Some(GeoMarker {
                lat,
                long,
                radius: marker_radius(count),
                tooltip: format!("{}<br> {}: {}", label, metric, group_thousands(count as i64)),
                label,
                color: color.to_string(),
            })
        })
        .collect()
}

/// Derives markers from the country snapshot ("All" tab): one marker
/// per country carrying the full confirmed/deaths/recovered/active
/// breakdown. A country without a recovered figure gets a distinct
/// "no data" line, while its active count zeroes the missing value.
pub fn markers_from_snapshot(snapshot: &SnapshotTable) -> Vec<GeoMarker> {
    let color = DatasetKind::Snapshot.color();
    snapshot
        .rows
        .iter()
        .filter_map(|row| {
            let (lat, long) = (row.lat?, row.long?);
            Some(GeoMarker {
                lat,
                long,
                radius: marker_radius(row.confirmed),
                tooltip: snapshot_tooltip(row),
                label: row.country.clone(),
                color: color.to_string(),
            })
        })
        .collect()
}

fn snapshot_tooltip(row: &CountrySnapshot) -> String {
    let recovered_line = match row.recovered {
        Some(r) => group_thousands(r as i64),
        None => "no data".to_string(),
    };
    format!(
        "{}<br> Confirmed: {}<br> Deaths: {}<br> Recovered: {}<br> Active: {}",
        row.country,
        group_thousands(row.confirmed as i64),
        group_thousands(row.deaths as i64),
        recovered_line,
        group_thousands(row.active()),
    )
}
