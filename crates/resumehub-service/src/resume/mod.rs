//! Resume documents: listing, creation, partial and section-scoped edits.

pub mod service;

pub use service::ResumeService;
