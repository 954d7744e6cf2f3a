//! Map marker endpoint.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use dashboard_core::DatasetKind;
use dashboard_telemetry::metrics;
use tracing::debug;

use crate::response::{ApiError, MarkersResponse};
use crate::state::AppState;

/// Maps a map-tab name to the dataset kind backing it.
fn parse_layer(raw: &str) -> Option<DatasetKind> {
    match raw {
        "all" => Some(DatasetKind::Snapshot),
        "cases" => Some(DatasetKind::Cases),
        "deaths" => Some(DatasetKind::Deaths),
        "recovered" => Some(DatasetKind::Recovered),
        _ => None,
    }
}

/// GET /api/markers/:layer - Circle markers for one map tab
/// (all/cases/deaths/recovered). Regenerated per tab change; rows
/// without coordinates are skipped.
pub async fn markers_handler(
    State(state): State<AppState>,
    Path(layer): Path<String>,
) -> Result<Json<MarkersResponse>, ApiError> {
    let start = Instant::now();
    metrics().marker_requests.inc();

    let kind = parse_layer(&layer).ok_or_else(|| {
        ApiError::bad_request(format!(
            "unknown map layer {:?}, expected all, cases, deaths, or recovered",
            layer
        ))
    })?;

    let markers = state.context.markers(kind);
    metrics().markers_built.inc_by(markers.len() as u64);
    metrics()
        .marker_latency_ms
        .observe(start.elapsed().as_millis() as u64);

    debug!(layer = %layer, count = markers.len(), "Rebuilt map markers");

    Ok(Json(MarkersResponse {
        layer,
        count: markers.len(),
        markers,
    }))
}
