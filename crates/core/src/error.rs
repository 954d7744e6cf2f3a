//! Unified error types for the dashboard.
//!
//! The taxonomy follows the system's failure model:
//! - `DataUnavailable` / `SchemaMismatch`: load-phase errors, fatal at startup
//! - `SelectionNotFound`: per-interaction, recoverable
//! - `DegenerateRatio`: per-computation, recoverable
//!
//! Missing coordinates are not an error; marker derivation skips those
//! rows silently.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the dashboard.
#[derive(Debug, Error)]
pub enum Error {
    /// A source table could not be fetched or decoded at startup.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// The time-series tables disagree on their date columns.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A user-entered selection matched no rows.
    #[error("no data for selection {0:?}")]
    SelectionNotFound(String),

    /// A ratio denominator was zero.
    #[error("degenerate ratio: {0}")]
    DegenerateRatio(String),

    /// A header or cell failed to decode.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    pub fn schema_mismatch(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    pub fn selection_not_found(selection: impl Into<String>) -> Self {
        Self::SelectionNotFound(selection.into())
    }

    pub fn degenerate_ratio(msg: impl Into<String>) -> Self {
        Self::DegenerateRatio(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::DataUnavailable(_) => 503,
            Self::SchemaMismatch(_) => 503,
            Self::SelectionNotFound(_) => 404,
            Self::DegenerateRatio(_) => 422,
            Self::Decode(_) => 502,
            Self::Serialization(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// Short machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataUnavailable(_) => "DATA_UNAVAILABLE",
            Self::SchemaMismatch(_) => "SCHEMA_MISMATCH",
            Self::SelectionNotFound(_) => "SELECTION_NOT_FOUND",
            Self::DegenerateRatio(_) => "DEGENERATE_RATIO",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
