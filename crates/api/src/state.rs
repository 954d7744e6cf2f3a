//! Application state shared across handlers.

use std::sync::Arc;

use dashboard_core::DataContext;

/// Shared application state: the immutable data context built during
/// the Load phase. Handlers only read from it; per-interaction outputs
/// are recomputed as pure functions over it.
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<DataContext>,
}

impl AppState {
    pub fn new(context: Arc<DataContext>) -> Self {
        Self { context }
    }
}
