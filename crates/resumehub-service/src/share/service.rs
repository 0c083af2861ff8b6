//! Share link service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use resumehub_core::config::ShareConfig;
use resumehub_core::error::{AppError, ErrorKind};
use resumehub_core::result::AppResult;
use resumehub_core::traits::Clock;
use resumehub_database::ShareRepository;
use resumehub_entity::share::{
    CreatedShare, NewSharedResume, PublicShare, ResumeSnapshot, ShareDebugEntry, ShareMetadata,
    ShareStats, SharedResume, SharedResumeChanges,
};

use super::link::{self, ShareIdGenerator};
use crate::ack::Acknowledgement;
use crate::context::RequestContext;

/// Identifier draws before giving up on a unique one.
const MAX_ID_ATTEMPTS: usize = 5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

const NOT_FOUND_OR_EXPIRED: &str = "Shared resume not found or expired";
const NOT_FOUND: &str = "Shared resume not found";

/// Request to publish a resume snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareRequest {
    /// Resume document as rendered by the client. Opaque to the server.
    #[serde(default)]
    pub resume_data: serde_json::Value,
    /// Link title.
    #[serde(default)]
    pub title: String,
    /// Optional description, stored as empty when absent.
    #[serde(default)]
    pub description: Option<String>,
    /// Days until the link stops resolving, fractions included. Zero,
    /// negative or absent means never.
    #[serde(default)]
    pub expires_in_days: Option<f64>,
}

/// Request to edit an existing link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShareRequest {
    /// Replacement snapshot.
    #[serde(default)]
    pub resume_data: Option<serde_json::Value>,
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Publish or unpublish the link.
    #[serde(default)]
    pub is_public: Option<bool>,
}

/// Manages share link creation, viewing and maintenance.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Share repository.
    shares: Arc<dyn ShareRepository>,
    /// Time source for expiry decisions.
    clock: Arc<dyn Clock>,
    /// Identifier generator.
    ids: Arc<ShareIdGenerator>,
    /// Share settings.
    config: ShareConfig,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(shares: Arc<dyn ShareRepository>, clock: Arc<dyn Clock>, config: ShareConfig) -> Self {
        Self {
            ids: Arc::new(ShareIdGenerator::new(config.id_length)),
            shares,
            clock,
            config,
        }
    }

    /// Replaces the identifier generator.
    pub fn with_generator(mut self, ids: ShareIdGenerator) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Public URL of a link.
    pub fn share_url(&self, share_id: &str) -> String {
        format!("{}/share/{share_id}", self.config.normalized_base_url())
    }

    /// Publishes a snapshot under a fresh identifier.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateShareRequest,
    ) -> AppResult<CreatedShare> {
        validate_title(&req.title)?;
        let resume_data = ResumeSnapshot::new(req.resume_data, self.config.max_snapshot_bytes)?;

        let now = self.clock.now();
        let mut input = NewSharedResume {
            share_id: String::new(),
            resume_data,
            title: req.title,
            description: req.description.unwrap_or_default(),
            expires_at: expiry(now, req.expires_in_days)?,
        };

        for attempt in 1..=MAX_ID_ATTEMPTS {
            input.share_id = self.ids.generate();

            match self.shares.insert(&input, now).await {
                Ok(share) => {
                    info!(
                        share_id = %share.share_id,
                        expires_at = ?share.expires_at,
                        ip = %ctx.ip_address,
                        mobile = ctx.is_mobile,
                        "Shared resume created"
                    );
                    return Ok(CreatedShare {
                        share_url: self.share_url(&share.share_id),
                        share_id: share.share_id,
                        title: share.title,
                        description: share.description,
                        created_at: share.created_at,
                        expires_at: share.expires_at,
                    });
                }
                Err(e) if e.is(ErrorKind::Conflict) => {
                    warn!(attempt, share_id = %input.share_id, "Share id collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(format!(
            "Could not allocate a unique share id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    /// Resolves a public, unexpired link and counts the view.
    pub async fn get_by_share_id(
        &self,
        ctx: &RequestContext,
        share_id: &str,
    ) -> AppResult<PublicShare> {
        if !link::is_well_formed(share_id) {
            return Err(AppError::not_found(NOT_FOUND_OR_EXPIRED));
        }

        let share = self
            .shares
            .record_view(share_id, self.clock.now())
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_OR_EXPIRED))?;

        info!(
            share_id = %share.share_id,
            view_count = share.view_count,
            ip = %ctx.ip_address,
            mobile = ctx.is_mobile,
            "Shared resume viewed"
        );

        Ok(PublicShare::from(share))
    }

    /// Edits the supplied fields. View count, expiry and creation time are kept.
    pub async fn update(&self, share_id: &str, req: UpdateShareRequest) -> AppResult<ShareMetadata> {
        if let Some(title) = &req.title {
            validate_title(title)?;
        }

        let changes = SharedResumeChanges {
            resume_data: req
                .resume_data
                .map(|data| ResumeSnapshot::new(data, self.config.max_snapshot_bytes))
                .transpose()?,
            title: req.title,
            description: req.description,
            is_public: req.is_public,
        };

        let share = if changes == SharedResumeChanges::default() {
            self.find(share_id).await?
        } else {
            self.shares
                .update(share_id, &changes, self.clock.now())
                .await?
                .ok_or_else(|| AppError::not_found(NOT_FOUND))?
        };

        info!(share_id = %share.share_id, is_public = share.is_public, "Shared resume updated");
        Ok(ShareMetadata::from(share))
    }

    /// Removes a link.
    pub async fn delete(&self, share_id: &str) -> AppResult<Acknowledgement> {
        if !link::is_well_formed(share_id) || !self.shares.delete(share_id).await? {
            return Err(AppError::not_found(NOT_FOUND));
        }

        info!(share_id, "Shared resume deleted");
        Ok(Acknowledgement::ok("Shared resume deleted successfully"))
    }

    /// Statistics for a link, regardless of visibility or expiry. Does not
    /// count as a view.
    pub async fn get_stats(&self, share_id: &str) -> AppResult<ShareStats> {
        let share = self.find(share_id).await?;
        Ok(ShareStats::at(share, self.clock.now()))
    }

    /// The most recently created links, for operators.
    pub async fn debug_list(&self, ctx: &RequestContext) -> AppResult<Vec<ShareDebugEntry>> {
        warn!(
            ip = %ctx.ip_address,
            limit = self.config.debug_list_limit,
            "Share debug listing requested"
        );

        let now = self.clock.now();
        let shares = self.shares.list_recent(self.config.debug_list_limit).await?;
        Ok(shares
            .iter()
            .map(|share| ShareDebugEntry::at(share, now))
            .collect())
    }

    /// Deletes links whose expiry has passed. Returns how many were removed.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        let removed = self.shares.purge_expired(self.clock.now()).await?;
        info!(removed, "Purged expired share links");
        Ok(removed)
    }

    async fn find(&self, share_id: &str) -> AppResult<SharedResume> {
        if !link::is_well_formed(share_id) {
            return Err(AppError::not_found(NOT_FOUND));
        }

        self.shares
            .find_by_share_id(share_id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }
}

fn validate_title(title: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::invalid_field("title", "must not be empty"));
    }
    Ok(())
}

fn expiry(now: DateTime<Utc>, days: Option<f64>) -> AppResult<Option<DateTime<Utc>>> {
    match days {
        // NaN compares false and falls through to "never".
        Some(days) if days > 0.0 => {
            Duration::try_milliseconds((days * MILLIS_PER_DAY).round() as i64)
                .and_then(|span| now.checked_add_signed(span))
                .map(Some)
                .ok_or_else(|| AppError::invalid_field("expiresInDays", "is out of range"))
        }
        _ => Ok(None),
    }
}
