//! # resumehub-service
//!
//! Business logic for ResumeHub. [`ResumeService`] owns resume documents
//! and their section-scoped edits; [`ShareService`] owns public share
//! links, their expiry and view counting.
//!
//! Services are built from `Arc` handles to the repositories and a
//! [`Clock`](resumehub_core::traits::Clock), and never see raw store errors.

pub mod ack;
pub mod context;
pub mod resume;
pub mod share;

pub use ack::Acknowledgement;
pub use context::RequestContext;
pub use resume::ResumeService;
pub use share::{CreateShareRequest, ShareIdGenerator, ShareService, UpdateShareRequest};
