//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use boxoffice_core::config::AppConfig;
use boxoffice_registry::SeatRegistry;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The seat registry, sole owner of seat state.
    pub registry: Arc<SeatRegistry>,
}
