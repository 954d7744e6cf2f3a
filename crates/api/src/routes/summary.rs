//! Summary cards endpoint.

use axum::{extract::State, Json};
use dashboard_telemetry::metrics;

use crate::response::SummaryResponse;
use crate::state::AppState;

/// GET /api/summary - Global totals, day-over-day changes, and the two
/// ratios. Computed once at load; this handler only reads.
pub async fn summary_handler(State(state): State<AppState>) -> Json<SummaryResponse> {
    metrics().summary_requests.inc();

    let latest_date = state
        .context
        .cases
        .dates
        .last()
        .cloned()
        .unwrap_or_default();

    Json(SummaryResponse {
        latest_date,
        metrics: state.context.metrics.clone(),
    })
}
