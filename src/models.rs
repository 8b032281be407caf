use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

// ============ Database Models ============

/// Lifecycle stage of a lead.
///
/// Stored as lowercase TEXT. There is no enforced transition graph: an
/// operator may move a lead between any two stages in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    /// Freshly submitted, nobody has looked at it yet.
    New,
    /// An operator has reached out.
    Contacted,
    /// The inquiry looks like a real project.
    Qualified,
    /// Became a paying customer.
    Converted,
    /// Went cold or declined.
    Lost,
}

impl LeadStatus {
    /// All valid stages, in lifecycle order.
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Converted,
        LeadStatus::Lost,
    ];

    /// Parses the lowercase wire/database form. Case-sensitive, matching
    /// the admin API contract ("New" is rejected).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(LeadStatus::New),
            "contacted" => Some(LeadStatus::Contacted),
            "qualified" => Some(LeadStatus::Qualified),
            "converted" => Some(LeadStatus::Converted),
            "lost" => Some(LeadStatus::Lost),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted contact-form inquiry.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique identifier, assigned by the store on creation. UUIDv7, so id
    /// order follows creation order.
    pub id: Uuid,
    /// Submitter's name, trimmed.
    pub name: String,
    /// Submitter's email, trimmed and lowercased.
    pub email: String,
    /// Kind of project the submitter is asking about.
    pub project_type: String,
    /// Budget bracket picked on the form.
    pub budget_range: String,
    /// Free-form inquiry text.
    pub message: String,
    /// Current lifecycle stage.
    pub status: LeadStatus,
    /// Set once at creation, never changed.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

/// Validated, normalized field set for inserting a new lead.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget_range: String,
    pub message: String,
}

// ============ API Request/Response Models ============

/// Raw contact form payload for `POST /submit`.
///
/// Every field is optional so that an absent key and an empty value travel
/// the same "All fields are required" validation path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub project_type: Option<String>,
    pub budget_range: Option<String>,
    pub message: Option<String>,
}

/// Submitted values echoed back on a successful submission.
///
/// The inquiry message and the internal id are intentionally omitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget_range: String,
}

/// Body of `PUT /leads/:id/status`. The raw string is validated against
/// [`LeadStatus`] in the handler so an unknown value maps to the API's own
/// 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// JSON envelope shared by every endpoint: `{success, message?, data?}`.
/// Absent parts are omitted from the serialized body, not sent as null.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success with a data payload and no message.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Success carrying both a human-readable message and a payload.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success with only a confirmation message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}
