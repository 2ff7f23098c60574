use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use sair_reit_sdk::ReitError;
use serde_json::json;
use tracing::error;

/// Unified error type that renders as a JSON `{"message": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

impl From<ReitError> for AppError {
    fn from(e: ReitError) -> Self {
        match e {
            ReitError::NotFound(msg) => AppError::not_found(msg),
            ReitError::InvalidArgument(msg) => AppError::bad_request(msg),
            other => AppError::internal(other.to_string()),
        }
    }
}
