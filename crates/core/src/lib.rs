//! Domain model and metrics engine for the epidemiological dashboard.

pub mod context;
pub mod error;
pub mod format;
pub mod markers;
pub mod metrics;
pub mod series;
pub mod table;

pub use context::DataContext;
pub use error::{Error, Result};
pub use markers::{DatasetKind, GeoMarker};
pub use metrics::DerivedMetrics;
pub use series::{ChartSeries, DailyDelta, Selection};
pub use table::{CountrySnapshot, SnapshotTable, TimeSeriesRow, TimeSeriesTable};
