use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
///
/// Every variant maps onto the API's JSON envelope
/// `{"success": false, "message": ...}` with the matching status code.
#[derive(Debug)]
pub enum AppError {
    /// Caller-supplied input violates a field or format rule.
    Validation(String),
    /// Request did not pass the operator gate. The reason is logged but
    /// the caller only ever sees a generic "Unauthorized".
    Unauthorized(String),
    /// Referenced record does not exist.
    NotFound(String),
    /// Persistence or other unexpected failure. `public` is the generic
    /// message for the caller; `detail` stays in the server log.
    Internal { public: String, detail: String },
}

impl AppError {
    /// Wraps a low-level failure, keeping its detail out of the response.
    pub fn internal(public: impl Into<String>, source: impl fmt::Display) -> Self {
        AppError::Internal {
            public: public.into(),
            detail: source.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal { public, detail } => {
                write!(f, "Internal error: {} ({})", public, detail)
            }
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Internal detail is logged here and never serialized; the caller
    /// receives only the envelope message.
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized access: {}", msg);
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal { public, detail } => {
                tracing::error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, public)
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}
