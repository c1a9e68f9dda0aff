pub mod health;
pub mod project;
pub mod task;

use axum::http::StatusCode;
use axum::Json;
use tracker_core::error::CoreError;
use tracker_core::types::{parse_id, DbId};

use crate::error::AppError;
use crate::response::ErrorResponse;

/// Parse a path id. A malformed id cannot match any record, so it is
/// reported as the entity not being found.
pub(crate) fn record_id(entity: &'static str, raw: &str) -> Result<DbId, AppError> {
    parse_id(raw).ok_or_else(|| CoreError::not_found(entity, raw).into())
}

/// Fallback for unmatched routes.
pub async fn route_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found")),
    )
}
