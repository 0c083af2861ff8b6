//! Projections of a share link returned to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::SharedResume;

/// Result of creating a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedShare {
    pub share_id: String,
    pub share_url: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// What a public visitor sees. `view_count` already includes the visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicShare {
    pub share_id: String,
    pub resume_data: serde_json::Value,
    pub title: String,
    pub description: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SharedResume> for PublicShare {
    fn from(share: SharedResume) -> Self {
        Self {
            share_id: share.share_id,
            resume_data: share.resume_data.into_value(),
            title: share.title,
            description: share.description,
            view_count: share.view_count,
            created_at: share.created_at,
            updated_at: share.updated_at,
        }
    }
}

/// Metadata returned after an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareMetadata {
    pub share_id: String,
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub view_count: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<SharedResume> for ShareMetadata {
    fn from(share: SharedResume) -> Self {
        Self {
            share_id: share.share_id,
            title: share.title,
            description: share.description,
            is_public: share.is_public,
            view_count: share.view_count,
            updated_at: share.updated_at,
        }
    }
}

/// Owner-side statistics. Available regardless of visibility or expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareStats {
    pub share_id: String,
    pub title: String,
    pub view_count: i64,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_expired: bool,
}

impl ShareStats {
    pub fn at(share: SharedResume, now: DateTime<Utc>) -> Self {
        let is_expired = share.is_expired_at(now);
        Self {
            share_id: share.share_id,
            title: share.title,
            view_count: share.view_count,
            is_public: share.is_public,
            created_at: share.created_at,
            updated_at: share.updated_at,
            expires_at: share.expires_at,
            is_expired,
        }
    }
}

/// One row of the operational debug listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareDebugEntry {
    pub share_id: String,
    pub title: String,
    pub is_public: bool,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_expired: bool,
}

impl ShareDebugEntry {
    pub fn at(share: &SharedResume, now: DateTime<Utc>) -> Self {
        Self {
            share_id: share.share_id.clone(),
            title: share.title.clone(),
            is_public: share.is_public,
            view_count: share.view_count,
            created_at: share.created_at,
            expires_at: share.expires_at,
            is_expired: share.is_expired_at(now),
        }
    }
}
