//! Operator gate for the lead-management routes.
//!
//! Layered over the admin router group so unauthorized requests are
//! rejected before any handler runs. Operators authenticate with a static
//! bearer token configured at startup.

use crate::errors::AppError;
use crate::handlers::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Middleware guarding `/leads` and friends.
///
/// Expects `Authorization: Bearer <token>` matching the configured
/// operator token; anything else short-circuits with a 401 envelope.
pub async fn require_operator(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Invalid Authorization format, expected Bearer token".to_string())
    })?;

    // Constant-time comparison to prevent timing attacks
    if !constant_time_compare(token, &state.config.admin_token) {
        return Err(AppError::Unauthorized("Invalid operator token".to_string()));
    }

    Ok(next.run(request).await)
}

/// Constant-time string comparison (basic implementation)
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.as_bytes()
        .iter()
        .zip(b.as_bytes().iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
