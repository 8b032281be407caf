use crate::config::Config;
use crate::errors::AppError;
use crate::models::{
    ApiResponse, ContactFormData, Lead, LeadStatus, NewLead, SubmissionReceipt,
    UpdateStatusRequest,
};
use crate::store::LeadStore;
use crate::validation::{has_value, is_valid_email};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,
    /// Application configuration.
    pub config: Config,
}

/// Health check endpoint.
///
/// Returns the service status and version. Kept outside the rate limiter
/// so deployment platforms can probe it freely.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "nextgen-leads-api",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// POST /submit
///
/// Public contact-form submission.
///
/// Flow:
/// 1. Reject if any of the five fields is missing or blank.
/// 2. Reject if the email does not look like `local@domain.tld`.
/// 3. Persist the lead with `status = new`.
/// 4. Echo the submitted identity fields back (never the message or id).
///
/// Validation runs before any store call, so a rejected submission leaves
/// no trace in the database.
pub async fn submit_contact_form(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactFormData>,
) -> Result<Json<ApiResponse<SubmissionReceipt>>, AppError> {
    tracing::info!("POST /submit - contact form submission received");

    let required = [
        &form.name,
        &form.email,
        &form.project_type,
        &form.budget_range,
        &form.message,
    ];
    if !required.into_iter().all(has_value) {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    let name = form.name.unwrap_or_default();
    let email = form.email.unwrap_or_default();
    let project_type = form.project_type.unwrap_or_default();
    let budget_range = form.budget_range.unwrap_or_default();
    let message = form.message.unwrap_or_default();

    if !is_valid_email(&email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    let store = LeadStore::new(state.db.clone());
    let lead = store
        .create(NewLead {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            project_type: project_type.clone(),
            budget_range: budget_range.clone(),
            message,
        })
        .await
        .map_err(|e| {
            AppError::internal("Failed to submit contact form. Please try again later.", e)
        })?;

    tracing::info!("Captured lead {} from contact form", lead.id);

    Ok(Json(ApiResponse::with_message(
        "Thank you for your inquiry! We will get back to you within 24 hours.",
        SubmissionReceipt {
            name,
            email,
            project_type,
            budget_range,
        },
    )))
}

/// GET /leads
///
/// Operator view of every captured lead, newest first.
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Lead>>>, AppError> {
    let store = LeadStore::new(state.db.clone());
    let leads = store
        .list_all()
        .await
        .map_err(|e| AppError::internal("Failed to fetch leads", e))?;

    tracing::info!("GET /leads - returning {} lead(s)", leads.len());

    Ok(Json(ApiResponse::data(leads)))
}

/// PUT /leads/:id/status
///
/// Moves a lead to another lifecycle stage. The status value is validated
/// before the id is resolved, so an unknown status reports 400 even when
/// the id is bogus. Any stage may follow any other; there is no enforced
/// pipeline.
pub async fn update_lead_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<Lead>>, AppError> {
    let status = body
        .status
        .as_deref()
        .and_then(LeadStatus::parse)
        .ok_or_else(|| AppError::Validation("Invalid status".to_string()))?;

    // An id that does not parse can never reference a stored lead.
    let id = Uuid::parse_str(&id).map_err(|_| AppError::NotFound("Lead not found".to_string()))?;

    let store = LeadStore::new(state.db.clone());
    let lead = store
        .update_status(id, status)
        .await
        .map_err(|e| AppError::internal("Failed to update lead status", e))?
        .ok_or_else(|| AppError::NotFound("Lead not found".to_string()))?;

    tracing::info!("Lead {} moved to status '{}'", lead.id, lead.status);

    Ok(Json(ApiResponse::data(lead)))
}

/// DELETE /leads/:id
///
/// Removes a lead entirely.
pub async fn delete_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::NotFound("Lead not found".to_string()))?;

    let store = LeadStore::new(state.db.clone());
    let lead = store
        .delete_by_id(id)
        .await
        .map_err(|e| AppError::internal("Failed to delete lead", e))?
        .ok_or_else(|| AppError::NotFound("Lead not found".to_string()))?;

    tracing::info!("Lead {} deleted", lead.id);

    Ok(Json(ApiResponse::message("Lead deleted successfully")))
}
