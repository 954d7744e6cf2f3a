//! Internal telemetry: tracing setup, metrics, and health reporting.

pub mod health;
pub mod metrics;
pub mod tracing_setup;

pub use health::{health, ComponentHealth, HealthRegistry, HealthStatus};
pub use metrics::{metrics, Counter, Histogram, Metrics};
pub use tracing_setup::{init_tracing, init_tracing_from_env, TracingConfig};
