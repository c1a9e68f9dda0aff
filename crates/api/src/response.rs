//! Response envelope types shared by every handler.
//!
//! Success: `{ "success": true, "count"?: n, "data": ... }`.
//! Failure: `{ "success": false, "message": "...", "error"?: "..." }`.

use serde::Serialize;

/// Success envelope. `count` is only present on list responses.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data,
        }
    }
}

impl<T: Serialize> DataResponse<Vec<T>> {
    /// Wrap a list, setting `count` to its length.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: items,
        }
    }
}

/// Serializes as `{}`; the payload of a successful delete.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

/// Failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    /// Failure detail, only filled in development.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }
}
