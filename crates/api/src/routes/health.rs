use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Root-level liveness routes (not under `/api`).
///
/// ```text
/// GET /        -> plain-text liveness message
/// GET /health  -> JSON status including store reachability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
}
