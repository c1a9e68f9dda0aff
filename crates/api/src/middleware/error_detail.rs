//! Development-only failure detail.

use axum::extract::{Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::{ErrorDetail, SERVER_ERROR};
use crate::response::ErrorResponse;
use crate::state::AppState;

/// Rewrite unexpected-failure responses to include an `error` field when the
/// server runs in development. Elsewhere the detail is dropped.
///
/// Only the body is replaced; status and headers are kept.
pub async fn expose_error_detail(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(ErrorDetail(detail)) = response.extensions_mut().remove::<ErrorDetail>() else {
        return response;
    };

    if !state.config.environment.is_development() {
        return response;
    }

    let body = ErrorResponse {
        error: Some(detail),
        ..ErrorResponse::new(SERVER_ERROR)
    };
    let body = Json(body).into_response().into_body();
    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, body)
}
