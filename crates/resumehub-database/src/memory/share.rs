//! In-memory share link repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use resumehub_core::error::AppError;
use resumehub_core::result::AppResult;
use resumehub_entity::share::{NewSharedResume, SharedResume, SharedResumeChanges};

use crate::repositories::ShareRepository;

/// Share link storage held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryShareRepository {
    links: Arc<DashMap<String, SharedResume>>,
}

impl MemoryShareRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links, expired ones included.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl ShareRepository for MemoryShareRepository {
    async fn insert(
        &self,
        input: &NewSharedResume,
        now: DateTime<Utc>,
    ) -> AppResult<SharedResume> {
        match self.links.entry(input.share_id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Share id '{}' already exists",
                input.share_id
            ))),
            Entry::Vacant(slot) => {
                let share = SharedResume {
                    share_id: input.share_id.clone(),
                    resume_data: input.resume_data.clone(),
                    title: input.title.clone(),
                    description: input.description.clone(),
                    is_public: true,
                    view_count: 0,
                    created_at: now,
                    updated_at: now,
                    expires_at: input.expires_at,
                };
                slot.insert(share.clone());
                Ok(share)
            }
        }
    }

    async fn find_by_share_id(&self, share_id: &str) -> AppResult<Option<SharedResume>> {
        Ok(self.links.get(share_id).map(|entry| entry.value().clone()))
    }

    async fn record_view(
        &self,
        share_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<SharedResume>> {
        let Some(mut entry) = self.links.get_mut(share_id) else {
            return Ok(None);
        };
        let share = entry.value_mut();
        if !share.is_viewable_at(now) {
            return Ok(None);
        }
        share.view_count += 1;
        Ok(Some(share.clone()))
    }

    async fn update(
        &self,
        share_id: &str,
        changes: &SharedResumeChanges,
        now: DateTime<Utc>,
    ) -> AppResult<Option<SharedResume>> {
        let Some(mut entry) = self.links.get_mut(share_id) else {
            return Ok(None);
        };
        let share = entry.value_mut();
        if let Some(resume_data) = &changes.resume_data {
            share.resume_data = resume_data.clone();
        }
        if let Some(title) = &changes.title {
            share.title = title.clone();
        }
        if let Some(description) = &changes.description {
            share.description = description.clone();
        }
        if let Some(is_public) = changes.is_public {
            share.is_public = is_public;
        }
        share.updated_at = now;
        Ok(Some(share.clone()))
    }

    async fn delete(&self, share_id: &str) -> AppResult<bool> {
        Ok(self.links.remove(share_id).is_some())
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<SharedResume>> {
        let mut links: Vec<SharedResume> = self
            .links
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        links.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(links)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let before = self.links.len();
        self.links
            .retain(|_, share| share.expires_at.is_none_or(|expires_at| expires_at > now));
        Ok(before.saturating_sub(self.links.len()) as u64)
    }
}
