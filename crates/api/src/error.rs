use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracker_core::error::CoreError;
use tracker_db::StoreError;

use crate::response::ErrorResponse;

/// Client-facing message for unexpected failures.
pub const SERVER_ERROR: &str = "Server Error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tracker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request that could not be understood, such as malformed JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An unexpected failure whose cause was already logged. The message is
    /// sent verbatim and no detail is ever attached.
    #[error("{0}")]
    Opaque(&'static str),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Detail of an unexpected failure, attached to the response as an
/// extension. The error-detail middleware decides whether clients see it.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, %id, "Record not found");
                (StatusCode::NOT_FOUND, format!("{entity} not found"), None)
            }
            AppError::Core(CoreError::Validation(errors)) => {
                (StatusCode::BAD_REQUEST, errors.to_string(), None)
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR.to_string(),
                    Some(err.to_string()),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Opaque(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string(), None),
        };

        let mut response = (status, Json(ErrorResponse::new(message))).into_response();
        if let Some(detail) = detail {
            response.extensions_mut().insert(ErrorDetail(detail));
        }
        response
    }
}
