//! Route handlers.

pub mod debug;
pub mod health;
pub mod resume;
pub mod share;

use axum::http::Uri;

use resumehub_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found(format!("No route for {}", uri.path())).into()
}
