//! Ranked country table endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use dashboard_telemetry::metrics;
use serde::Deserialize;

use crate::response::{CountriesResponse, CountryRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CountriesQuery {
    /// Optional cap, e.g. 15 for the top-countries bar chart.
    pub limit: Option<usize>,
}

/// GET /api/countries - Countries ranked by confirmed count,
/// descending, ties in source order.
pub async fn countries_handler(
    State(state): State<AppState>,
    Query(query): Query<CountriesQuery>,
) -> Json<CountriesResponse> {
    metrics().country_table_requests.inc();

    let ranking = &state.context.ranking;
    let limit = query.limit.unwrap_or(ranking.len());

    let countries = state
        .context
        .top_countries(limit)
        .iter()
        .map(|row| CountryRow {
            country: row.country.clone(),
            confirmed: row.confirmed,
            deaths: row.deaths,
            recovered: row.recovered_or_zero(),
            has_recovered: row.has_recovered(),
            active: row.active(),
        })
        .collect();

    Json(CountriesResponse { countries })
}
