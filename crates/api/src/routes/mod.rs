//! API routes.

pub mod countries;
pub mod health;
pub mod markers;
pub mod page;
pub mod series;
pub mod summary;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Creates the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(page::index_handler))
        .route("/api/summary", get(summary::summary_handler))
        .route("/api/countries", get(countries::countries_handler))
        .route("/api/series", get(series::series_handler))
        .route("/api/daily", get(series::daily_handler))
        .route("/api/markers/:layer", get(markers::markers_handler))
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::ready_handler))
        .route("/health/live", get(health::live_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
