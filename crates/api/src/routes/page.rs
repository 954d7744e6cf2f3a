//! The static dashboard page.
//!
//! A single self-contained document that drives the JSON endpoints.
//! Cards, table, and the daily bar chart are rendered once at load;
//! the series chart re-renders on country/scale input and the map
//! region on tab change, each through exactly one API call.

use axum::response::Html;

const INDEX: &str = include_str!("../../assets/index.html");

/// GET / - Serves the dashboard page.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX)
}
