//! Standardized API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use dashboard_core::{ChartSeries, DailyDelta, DerivedMetrics, GeoMarker};

/// Summary card payload: global totals, changes, and ratios.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Label of the latest date column the totals come from.
    pub latest_date: String,
    pub metrics: DerivedMetrics,
}

/// One row of the ranked country table.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountryRow {
    pub country: String,
    pub confirmed: u64,
    pub deaths: u64,
    /// Zeroed when the source has no recovered figure; check
    /// `has_recovered` before rendering it as a real value.
    pub recovered: u64,
    pub has_recovered: bool,
    pub active: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountriesResponse {
    pub countries: Vec<CountryRow>,
}

/// Chart series plus the echoed axis scale for the client's chart.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub scale: String,
    pub series: ChartSeries,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyResponse {
    pub daily: Vec<DailyDelta>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarkersResponse {
    pub layer: String,
    pub count: usize,
    pub markers: Vec<GeoMarker>,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub source_loaded: bool,
    pub date_columns: usize,
    pub countries: usize,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// API error type carrying the HTTP status and a coded body.
pub struct ApiError {
    pub status: StatusCode,
    pub response: ErrorResponse,
}

impl ApiError {
    pub fn with_code(status: StatusCode, code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            status,
            response: ErrorResponse::new(msg, code),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::with_code(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_code(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<dashboard_core::Error> for ApiError {
    fn from(err: dashboard_core::Error) -> Self {
        let status = StatusCode::from_u16(err.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        ApiError::with_code(status, err.code(), err.to_string())
    }
}
