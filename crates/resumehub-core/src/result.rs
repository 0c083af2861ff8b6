//! Convenience result type alias for ResumeHub.

use crate::error::AppError;

/// A specialized `Result` type for ResumeHub operations.
pub type AppResult<T> = Result<T, AppError>;
