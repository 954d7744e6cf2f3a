//! Time-series chart endpoints: per-selection cumulative series and
//! the global daily-increase series.

use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};
use dashboard_core::Selection;
use dashboard_telemetry::metrics;
use serde::Deserialize;
use tracing::{debug, info};

use crate::response::{ApiError, DailyResponse, SeriesResponse};
use crate::state::AppState;

/// Axis scale toggle. Presentational only: it never alters the numbers,
/// the client applies it to the chart's y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Logarithmic,
}

impl Scale {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "linear" => Some(Self::Linear),
            "logarithmic" => Some(Self::Logarithmic),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// Country name or the "World" sentinel.
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_scale")]
    pub scale: String,
}

fn default_country() -> String {
    "World".to_string()
}

fn default_scale() -> String {
    "linear".to_string()
}

/// GET /api/series - Cumulative cases/deaths/recovered for a selection.
///
/// Called once per country-filter or scale-toggle interaction. An
/// unknown country is a 404 with a user-visible message, never a flat
/// zero chart; the error is local to this interaction.
pub async fn series_handler(
    State(state): State<AppState>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let start = Instant::now();
    metrics().series_requests.inc();

    let scale = Scale::parse(&query.scale).ok_or_else(|| {
        ApiError::bad_request(format!(
            "unknown scale {:?}, expected \"linear\" or \"logarithmic\"",
            query.scale
        ))
    })?;

    let selection = Selection::parse(&query.country);
    debug!(selection = %selection, scale = scale.as_str(), "Rebuilding chart series");

    let series = state.context.chart_series(&selection).map_err(|e| {
        metrics().series_not_found.inc();
        info!(selection = %selection, "Selection matched no rows");
        ApiError::from(e)
    })?;

    metrics()
        .series_latency_ms
        .observe(start.elapsed().as_millis() as u64);

    Ok(Json(SeriesResponse {
        scale: scale.as_str().to_string(),
        series,
    }))
}

/// GET /api/daily - Day-over-day increase of global cases. Global only;
/// the dashboard has no per-country daily view.
pub async fn daily_handler(State(state): State<AppState>) -> Json<DailyResponse> {
    metrics().daily_requests.inc();
    Json(DailyResponse {
        daily: state.context.daily.clone(),
    })
}
