//! # resumehub-entity
//!
//! Domain models for ResumeHub. A [`resume::Resume`] is a large nested
//! document edited section by section; a [`share::SharedResume`] is a
//! decoupled public snapshot addressed by a short share id.
//!
//! Input structs derive `validator::Validate`; failures convert into
//! `AppError` with per-field details.

pub mod resume;
pub mod share;

/// Top-level JSON fields to merge into a stored document.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;
