//! In-memory resume repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use resumehub_core::error::AppError;
use resumehub_core::result::AppResult;
use resumehub_core::types::ResumeId;
use resumehub_entity::FieldMap;
use resumehub_entity::resume::{NewResume, Resume, ResumeContent, ResumeFilter, ResumeUpdate};

use crate::repositories::ResumeRepository;

/// Resume storage held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResumeRepository {
    resumes: Arc<DashMap<ResumeId, Resume>>,
}

impl MemoryResumeRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Merge `fields` over the serialized document and read it back.
fn merge_document(content: &ResumeContent, fields: &FieldMap) -> AppResult<ResumeContent> {
    let mut document = serde_json::to_value(content)?;
    if let Some(map) = document.as_object_mut() {
        for (key, value) in fields {
            map.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(document)
        .map_err(|e| AppError::internal(format!("Merged resume document is malformed: {e}")))
}

#[async_trait]
impl ResumeRepository for MemoryResumeRepository {
    async fn insert(&self, input: &NewResume, now: DateTime<Utc>) -> AppResult<Resume> {
        let resume = Resume {
            id: ResumeId::new(),
            user_id: input.user_id.clone(),
            is_active: true,
            content: input.content.clone(),
            created_at: now,
            updated_at: now,
        };
        self.resumes.insert(resume.id, resume.clone());
        Ok(resume)
    }

    async fn find_by_id(&self, id: ResumeId) -> AppResult<Option<Resume>> {
        Ok(self.resumes.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self, filter: &ResumeFilter) -> AppResult<Vec<Resume>> {
        let mut resumes: Vec<Resume> = self
            .resumes
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        resumes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(resumes)
    }

    async fn update(
        &self,
        id: ResumeId,
        update: &ResumeUpdate,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Resume>> {
        let Some(mut entry) = self.resumes.get_mut(&id) else {
            return Ok(None);
        };

        let resume = entry.value_mut();
        if !update.fields.is_empty() {
            resume.content = merge_document(&resume.content, &update.fields)?;
        }
        if let Some(user_id) = &update.user_id {
            resume.user_id = user_id.clone();
        }
        if let Some(is_active) = update.is_active {
            resume.is_active = is_active;
        }
        resume.updated_at = now;

        Ok(Some(resume.clone()))
    }

    async fn merge_contact(
        &self,
        id: ResumeId,
        fields: &FieldMap,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Resume>> {
        let Some(mut entry) = self.resumes.get_mut(&id) else {
            return Ok(None);
        };

        let resume = entry.value_mut();
        let mut contact = serde_json::to_value(&resume.content.contact)?;
        if let Some(map) = contact.as_object_mut() {
            for (key, value) in fields {
                map.insert(key.clone(), value.clone());
            }
        }
        resume.content.contact = serde_json::from_value(contact)
            .map_err(|e| AppError::internal(format!("Merged contact is malformed: {e}")))?;
        resume.updated_at = now;

        Ok(Some(resume.clone()))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.resumes.len() as u64)
    }
}
