//! The immutable data context built at the end of the Load phase.
//!
//! Construction validates the cross-table schema invariant and
//! precomputes everything the startup-rendered UI regions need (cards,
//! ranked table, daily bar chart). The Serve phase only reads from it;
//! per-interaction outputs (chart series, markers) are pure functions
//! over the same context.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::markers::{markers_from_series, markers_from_snapshot, DatasetKind, GeoMarker};
use crate::metrics::DerivedMetrics;
use crate::series::{chart_series, daily_new_cases, ChartSeries, DailyDelta, Selection};
use crate::table::{validate_aligned, CountrySnapshot, SnapshotTable, TimeSeriesTable};

/// Validated, immutable source data plus the load-time derived values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataContext {
    pub cases: TimeSeriesTable,
    pub deaths: TimeSeriesTable,
    pub recovered: TimeSeriesTable,
    pub snapshot: SnapshotTable,
    pub metrics: DerivedMetrics,
    /// Countries by confirmed count, descending, stable.
    pub ranking: Vec<CountrySnapshot>,
    pub daily: Vec<DailyDelta>,
}

impl DataContext {
    /// Builds the context, enforcing date-column alignment across the
    /// three time-series tables before deriving anything.
    pub fn new(
        cases: TimeSeriesTable,
        deaths: TimeSeriesTable,
        recovered: TimeSeriesTable,
        snapshot: SnapshotTable,
    ) -> Result<Self> {
        validate_aligned(&cases, &deaths, &recovered)?;
        let metrics = DerivedMetrics::compute(&cases, &deaths, &recovered)?;
        let ranking = snapshot.ranked();
        let daily = daily_new_cases(&cases);
        Ok(Self {
            cases,
            deaths,
            recovered,
            snapshot,
            metrics,
            ranking,
            daily,
        })
    }

    /// Recomputes the chart series for a selection. Called once per
    /// country-filter or scale-toggle interaction.
    pub fn chart_series(&self, selection: &Selection) -> Result<ChartSeries> {
        chart_series(selection, &self.cases, &self.deaths, &self.recovered)
    }

    /// Recomputes the marker set for a map layer. Called once per
    /// map-tab interaction.
    pub fn markers(&self, kind: DatasetKind) -> Vec<GeoMarker> {
        match kind {
            DatasetKind::Cases => markers_from_series(kind, &self.cases),
            DatasetKind::Deaths => markers_from_series(kind, &self.deaths),
            DatasetKind::Recovered => markers_from_series(kind, &self.recovered),
            DatasetKind::Snapshot => markers_from_snapshot(&self.snapshot),
        }
    }

    /// The top `limit` countries by confirmed count.
    pub fn top_countries(&self, limit: usize) -> &[CountrySnapshot] {
        &self.ranking[..limit.min(self.ranking.len())]
    }
}
