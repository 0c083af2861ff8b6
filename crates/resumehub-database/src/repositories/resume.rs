//! PostgreSQL resume repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

use resumehub_core::result::AppResult;
use resumehub_core::types::ResumeId;
use resumehub_entity::FieldMap;
use resumehub_entity::resume::{NewResume, Resume, ResumeContent, ResumeFilter, ResumeUpdate};

use super::ResumeRepository;
use crate::connection::PgConnectionManager;
use crate::error::map_sqlx_error;

/// A `resumes` row. The document body lives in a JSONB column.
#[derive(Debug, FromRow)]
struct ResumeRow {
    id: ResumeId,
    user_id: String,
    is_active: bool,
    document: Json<ResumeContent>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for Resume {
    fn from(row: ResumeRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            is_active: row.is_active,
            content: row.document.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Resume storage backed by the shared PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgResumeRepository {
    connections: Arc<PgConnectionManager>,
}

impl PgResumeRepository {
    /// Create a new resume repository.
    pub fn new(connections: Arc<PgConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    async fn insert(&self, input: &NewResume, now: DateTime<Utc>) -> AppResult<Resume> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, ResumeRow>(
            "INSERT INTO resumes (id, user_id, is_active, document, created_at, updated_at) \
             VALUES ($1, $2, TRUE, $3, $4, $4) RETURNING *",
        )
        .bind(ResumeId::new())
        .bind(&input.user_id)
        .bind(Json(&input.content))
        .bind(now)
        .fetch_one(&pool)
        .await
        .map(Resume::from)
        .map_err(|e| map_sqlx_error(&self.connections, "Failed to create resume", e))
    }

    async fn find_by_id(&self, id: ResumeId) -> AppResult<Option<Resume>> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map(|row| row.map(Resume::from))
            .map_err(|e| map_sqlx_error(&self.connections, "Failed to find resume", e))
    }

    async fn list(&self, filter: &ResumeFilter) -> AppResult<Vec<Resume>> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes \
             WHERE ($1::TEXT IS NULL OR user_id = $1) AND ($2 OR is_active) \
             ORDER BY updated_at DESC",
        )
        .bind(filter.user_id.as_deref())
        .bind(filter.include_inactive)
        .fetch_all(&pool)
        .await
        .map(|rows| rows.into_iter().map(Resume::from).collect())
        .map_err(|e| map_sqlx_error(&self.connections, "Failed to list resumes", e))
    }

    async fn update(
        &self,
        id: ResumeId,
        update: &ResumeUpdate,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Resume>> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, ResumeRow>(
            "UPDATE resumes SET document = document || $2, \
             user_id = COALESCE($3, user_id), \
             is_active = COALESCE($4, is_active), \
             updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(&update.fields))
        .bind(update.user_id.as_deref())
        .bind(update.is_active)
        .bind(now)
        .fetch_optional(&pool)
        .await
        .map(|row| row.map(Resume::from))
        .map_err(|e| map_sqlx_error(&self.connections, "Failed to update resume", e))
    }

    async fn merge_contact(
        &self,
        id: ResumeId,
        fields: &FieldMap,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Resume>> {
        let pool = self.connections.get().await?;
        sqlx::query_as::<_, ResumeRow>(
            "UPDATE resumes SET document = jsonb_set(document, '{contact}', \
             COALESCE(document->'contact', '{}'::JSONB) || $2), \
             updated_at = $3 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(fields))
        .bind(now)
        .fetch_optional(&pool)
        .await
        .map(|row| row.map(Resume::from))
        .map_err(|e| map_sqlx_error(&self.connections, "Failed to update contact", e))
    }

    async fn count(&self) -> AppResult<u64> {
        let pool = self.connections.get().await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resumes")
            .fetch_one(&pool)
            .await
            .map_err(|e| map_sqlx_error(&self.connections, "Failed to count resumes", e))?;
        Ok(total as u64)
    }
}
