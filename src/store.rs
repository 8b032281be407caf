use crate::models::{Lead, LeadStatus, NewLead};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

/// Persistence for [`Lead`] records.
///
/// A thin wrapper over the connection pool; every operation is a single
/// atomic statement, so concurrent requests need no coordination beyond
/// what Postgres already gives a row-level write. Cheap to construct per
/// request.
pub struct LeadStore {
    pool: PgPool,
}

impl LeadStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new lead with `status = new` and a freshly generated
    /// UUIDv7 id. `created_at` and `updated_at` start out equal; both come
    /// from the application clock.
    pub async fn create(&self, fields: NewLead) -> sqlx::Result<Lead> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads
                (id, name, email, project_type, budget_range, message, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.project_type)
        .bind(&fields.budget_range)
        .bind(&fields.message)
        .bind(LeadStatus::New.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Stored lead {}", lead.id);
        Ok(lead)
    }

    /// All leads, newest first. The id tiebreaker keeps the order exact
    /// even when two inserts share a timestamp, since ids are
    /// time-ordered.
    pub async fn list_all(&self) -> sqlx::Result<Vec<Lead>> {
        sqlx::query_as::<_, Lead>(
            "SELECT * FROM leads ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Sets the status of the lead with `id` and refreshes `updated_at`.
    /// Returns `None` when no such lead exists.
    pub async fn update_status(&self, id: Uuid, status: LeadStatus) -> sqlx::Result<Option<Lead>> {
        sqlx::query_as::<_, Lead>(
            "UPDATE leads SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
    }

    /// Removes the lead with `id`, returning the deleted record, or
    /// `None` when no such lead exists.
    pub async fn delete_by_id(&self, id: Uuid) -> sqlx::Result<Option<Lead>> {
        sqlx::query_as::<_, Lead>("DELETE FROM leads WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
