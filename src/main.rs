//! Epidemiological dashboard backend.
//!
//! Two-phase lifecycle:
//! 1. Load: fetch the four source CSVs, decode, validate alignment,
//!    derive the global metrics. Any failure here is fatal; there is
//!    no dashboard without data.
//! 2. Serve: an axum HTTP API over the immutable data context, with
//!    one recomputation per user interaction.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

use dashboard_api::{router, AppState};
use dashboard_source::SourceConfig;
use dashboard_telemetry::{health, init_tracing_from_env, metrics};

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    #[serde(default)]
    source: SourceConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            source: SourceConfig::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!("Starting epi-dashboard v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config()?;

    // Load phase: fetch and validate all source data before serving
    // anything. A failed or malformed source is fatal.
    let load_start = Instant::now();
    let context = match dashboard_source::load_context(&config.source).await {
        Ok(context) => context,
        Err(e) => {
            health().source.set_unhealthy(e.to_string());
            return Err(e).context("Failed to load source data");
        }
    };
    metrics()
        .load_ms
        .observe(load_start.elapsed().as_millis() as u64);
    health().source.set_healthy();

    info!(
        date_columns = context.cases.dates.len(),
        countries = context.snapshot.rows.len(),
        total_cases = context.metrics.cases.total,
        load_ms = load_start.elapsed().as_millis() as u64,
        "Source data loaded"
    );

    // Serve phase: the context is immutable from here on.
    let state = AppState::new(Arc::new(context));
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("DASHBOARD")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Manual overrides for nested source config from environment
    // The config crate's nested parsing doesn't work reliably with underscored field names
    if let Ok(url) = std::env::var("DASHBOARD_SOURCE_CASES_URL") {
        config.source.cases_url = url;
    }
    if let Ok(url) = std::env::var("DASHBOARD_SOURCE_DEATHS_URL") {
        config.source.deaths_url = url;
    }
    if let Ok(url) = std::env::var("DASHBOARD_SOURCE_RECOVERED_URL") {
        config.source.recovered_url = url;
    }
    if let Ok(url) = std::env::var("DASHBOARD_SOURCE_SNAPSHOT_URL") {
        config.source.snapshot_url = url;
    }

    Ok(config)
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
