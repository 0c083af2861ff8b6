//! # resumehub-api
//!
//! HTTP API layer for ResumeHub built on Axum.
//!
//! Provides the resume and share link endpoints, health checks, the
//! optional debug listing, middleware (CORS, request logging), extractors,
//! DTOs, and the mapping from [`AppError`](resumehub_core::AppError) to
//! JSON error bodies.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
