use std::sync::Arc;

use tracker_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Store handle. Constructed once at startup and closed on shutdown.
    pub store: Arc<dyn Store>,
    pub config: Arc<ServerConfig>,
}
