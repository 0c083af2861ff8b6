//! Shared resume entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::snapshot::ResumeSnapshot;

/// A public snapshot of a resume reachable at `/share/{share_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedResume {
    /// Short URL-safe identifier, unique across all links.
    pub share_id: String,
    /// Snapshot of the resume at share time.
    pub resume_data: ResumeSnapshot,
    /// Title shown on the public page.
    pub title: String,
    /// Optional description, empty when not given.
    pub description: String,
    /// Hidden links behave as missing for public reads.
    pub is_public: bool,
    /// Number of public reads. Only ever increases.
    pub view_count: i64,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
    /// Last metadata change.
    pub updated_at: DateTime<Utc>,
    /// When the link stops resolving (`None` = never).
    pub expires_at: Option<DateTime<Utc>>,
}

impl SharedResume {
    /// Whether the expiry time has passed at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }

    /// Whether a public read at `now` may see this link.
    ///
    /// A link is viewable only while `expires_at` is strictly in the future.
    pub fn is_viewable_at(&self, now: DateTime<Utc>) -> bool {
        self.is_public && self.expires_at.is_none_or(|expires_at| expires_at > now)
    }
}

/// Data required to persist a new share link.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSharedResume {
    pub share_id: String,
    pub resume_data: ResumeSnapshot,
    pub title: String,
    pub description: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Mutable subset of a share link. Absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedResumeChanges {
    pub resume_data: Option<ResumeSnapshot>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}
