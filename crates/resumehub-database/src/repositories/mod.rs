//! Repository traits and their PostgreSQL implementations.
//!
//! Every write is a single store statement, so concurrent writers are
//! last-write-wins at the granularity of the fields they touch. Methods
//! that depend on the current time take it as `now`.

pub mod resume;
pub mod share;

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use resumehub_core::result::AppResult;
use resumehub_core::types::ResumeId;
use resumehub_entity::FieldMap;
use resumehub_entity::resume::{NewResume, Resume, ResumeFilter, ResumeUpdate};
use resumehub_entity::share::{NewSharedResume, SharedResume, SharedResumeChanges};

pub use resume::PgResumeRepository;
pub use share::PgShareRepository;

/// Persistent collection of resume documents.
#[async_trait]
pub trait ResumeRepository: Debug + Send + Sync + 'static {
    /// Persist a new, active resume. The store assigns id and timestamps.
    async fn insert(&self, input: &NewResume, now: DateTime<Utc>) -> AppResult<Resume>;

    /// Find a resume by id, active or not.
    async fn find_by_id(&self, id: ResumeId) -> AppResult<Option<Resume>>;

    /// List resumes matching `filter`, most recently updated first.
    async fn list(&self, filter: &ResumeFilter) -> AppResult<Vec<Resume>>;

    /// Merge top-level fields and row columns. `None` if the id is unknown.
    async fn update(
        &self,
        id: ResumeId,
        update: &ResumeUpdate,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Resume>>;

    /// Shallow-merge `fields` into the stored contact. `None` if the id is unknown.
    async fn merge_contact(
        &self,
        id: ResumeId,
        fields: &FieldMap,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Resume>>;

    /// Total number of stored resumes, including inactive ones.
    async fn count(&self) -> AppResult<u64>;
}

/// Persistent collection of share links.
#[async_trait]
pub trait ShareRepository: Debug + Send + Sync + 'static {
    /// Persist a new public link with a zero view count.
    ///
    /// Fails with `Conflict` if `share_id` is already taken.
    async fn insert(&self, input: &NewSharedResume, now: DateTime<Utc>)
    -> AppResult<SharedResume>;

    /// Find a link regardless of visibility or expiry.
    async fn find_by_share_id(&self, share_id: &str) -> AppResult<Option<SharedResume>>;

    /// Atomically increment the view count of a public, unexpired link and
    /// return it with the new count. `None` if no such link is viewable.
    async fn record_view(&self, share_id: &str, now: DateTime<Utc>)
    -> AppResult<Option<SharedResume>>;

    /// Apply metadata changes. `None` if the link does not exist.
    async fn update(
        &self,
        share_id: &str,
        changes: &SharedResumeChanges,
        now: DateTime<Utc>,
    ) -> AppResult<Option<SharedResume>>;

    /// Delete a link. Returns `true` if a row was removed.
    async fn delete(&self, share_id: &str) -> AppResult<bool>;

    /// Most recently created links first.
    async fn list_recent(&self, limit: i64) -> AppResult<Vec<SharedResume>>;

    /// Physically remove links whose expiry is at or before `now`.
    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}
