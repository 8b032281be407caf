//! Route table for the lead API.
//!
//! Only the API surface and the operator gate live here; environmental
//! layers (tracing, CORS, rate limiting, body size) are composed in
//! `main.rs`, so tests can mount this router directly.

use crate::auth;
use crate::handlers::{self, AppState};
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

/// Builds the public and operator routes, with the operator gate layered
/// over the lead-management group.
pub fn router(state: Arc<AppState>) -> Router {
    let operator_routes = Router::new()
        .route("/leads", get(handlers::list_leads))
        .route("/leads/:id/status", put(handlers::update_lead_status))
        .route("/leads/:id", delete(handlers::delete_lead))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_operator,
        ));

    Router::new()
        .route("/submit", post(handlers::submit_contact_form))
        .merge(operator_routes)
        .with_state(state)
}
