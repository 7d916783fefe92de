//! Consistent JSON error responses

use crate::types::ReceiptError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Build a `{"error": code, "message": message}` response
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ReceiptError::InvalidReceipt { .. } => {
                json_error(StatusCode::BAD_REQUEST, "invalid_receipt", message)
            }
            ReceiptError::NotFound { .. } => {
                json_error(StatusCode::NOT_FOUND, "not_found", message)
            }
        }
    }
}
