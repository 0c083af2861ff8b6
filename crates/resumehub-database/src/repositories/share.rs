//! PostgreSQL share link repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

use resumehub_core::result::AppResult;
use resumehub_entity::share::{NewSharedResume, ResumeSnapshot, SharedResume, SharedResumeChanges};

use super::ShareRepository;
use crate::connection::PgConnectionManager;
use crate::error::map_sqlx_error;

#[derive(Debug, FromRow)]
struct SharedResumeRow {
    share_id: String,
    resume_data: Json<serde_json::Value>,
    title: String,
    description: String,
    is_public: bool,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl From<SharedResumeRow> for SharedResume {
    fn from(row: SharedResumeRow) -> Self {
        Self {
            share_id: row.share_id,
            resume_data: ResumeSnapshot::from_stored(row.resume_data.0),
            title: row.title,
            description: row.description,
            is_public: row.is_public,
            view_count: row.view_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
            expires_at: row.expires_at,
        }
    }
}

/// Share link storage backed by the shared PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgShareRepository {
    connections: Arc<PgConnectionManager>,
}

impl PgShareRepository {
    /// Create a new share repository.
    pub fn new(connections: Arc<PgConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl ShareRepository for PgShareRepository {
    async fn insert(
        &self,
        input: &NewSharedResume,
        now: DateTime<Utc>,
    ) -> AppResult<SharedResume> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, SharedResumeRow>(
            "INSERT INTO shared_resumes \
             (share_id, resume_data, title, description, is_public, view_count, created_at, updated_at, expires_at) \
             VALUES ($1, $2, $3, $4, TRUE, 0, $5, $5, $6) RETURNING *",
        )
        .bind(&input.share_id)
        .bind(Json(input.resume_data.as_value()))
        .bind(&input.title)
        .bind(&input.description)
        .bind(now)
        .bind(input.expires_at)
        .fetch_one(&pool)
        .await
        .map(SharedResume::from)
        .map_err(|e| map_sqlx_error(&self.connections, "Failed to create shared resume", e))
    }

    async fn find_by_share_id(&self, share_id: &str) -> AppResult<Option<SharedResume>> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, SharedResumeRow>("SELECT * FROM shared_resumes WHERE share_id = $1")
            .bind(share_id)
            .fetch_optional(&pool)
            .await
            .map(|row| row.map(SharedResume::from))
            .map_err(|e| map_sqlx_error(&self.connections, "Failed to find shared resume", e))
    }

    async fn record_view(
        &self,
        share_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<SharedResume>> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, SharedResumeRow>(
            "UPDATE shared_resumes SET view_count = view_count + 1 \
             WHERE share_id = $1 AND is_public = TRUE \
             AND (expires_at IS NULL OR expires_at > $2) \
             RETURNING *",
        )
        .bind(share_id)
        .bind(now)
        .fetch_optional(&pool)
        .await
        .map(|row| row.map(SharedResume::from))
        .map_err(|e| map_sqlx_error(&self.connections, "Failed to record share view", e))
    }

    async fn update(
        &self,
        share_id: &str,
        changes: &SharedResumeChanges,
        now: DateTime<Utc>,
    ) -> AppResult<Option<SharedResume>> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, SharedResumeRow>(
            "UPDATE shared_resumes SET \
             resume_data = COALESCE($2, resume_data), \
             title = COALESCE($3, title), \
             description = COALESCE($4, description), \
             is_public = COALESCE($5, is_public), \
             updated_at = $6 \
             WHERE share_id = $1 RETURNING *",
        )
        .bind(share_id)
        .bind(changes.resume_data.as_ref().map(|data| Json(data.as_value())))
        .bind(changes.title.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.is_public)
        .bind(now)
        .fetch_optional(&pool)
        .await
        .map(|row| row.map(SharedResume::from))
        .map_err(|e| map_sqlx_error(&self.connections, "Failed to update shared resume", e))
    }

    async fn delete(&self, share_id: &str) -> AppResult<bool> {
        let pool = self.connections.get().await?;
        let result = sqlx::query("DELETE FROM shared_resumes WHERE share_id = $1")
            .bind(share_id)
            .execute(&pool)
            .await
            .map_err(|e| map_sqlx_error(&self.connections, "Failed to delete shared resume", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<SharedResume>> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, SharedResumeRow>(
            "SELECT * FROM shared_resumes ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&pool)
        .await
        .map(|rows| rows.into_iter().map(SharedResume::from).collect())
        .map_err(|e| map_sqlx_error(&self.connections, "Failed to list shared resumes", e))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let pool = self.connections.get().await?;
        let result = sqlx::query(
            "DELETE FROM shared_resumes WHERE expires_at IS NOT NULL AND expires_at <= $1",
        )
        .bind(now)
        .execute(&pool)
        .await
        .map_err(|e| map_sqlx_error(&self.connections, "Failed to purge expired shares", e))?;
        Ok(result.rows_affected())
    }
}
