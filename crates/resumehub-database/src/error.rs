//! Mapping of sqlx failures into the application taxonomy.

use tracing::warn;

use resumehub_core::error::{AppError, ErrorKind};

use crate::connection::PgConnectionManager;

/// Whether `err` means the connection itself is unusable.
pub fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

/// Whether `err` means a row did not match the shape the code expects.
pub fn is_decode_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::Encode(_)
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::RowNotFound
    )
}

/// Classify a sqlx error.
///
/// Unique violations become `Conflict` and decode failures `Internal`.
/// Everything else is reported as `StoreUnavailable`; connection-class
/// failures additionally discard the shared pool so the next call
/// reconnects.
pub fn map_sqlx_error(
    manager: &PgConnectionManager,
    context: &'static str,
    err: sqlx::Error,
) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::with_source(ErrorKind::Conflict, context, err);
        }
    }

    if is_decode_error(&err) {
        return AppError::with_source(ErrorKind::Internal, format!("{context}: {err}"), err);
    }

    if is_connection_error(&err) {
        warn!(error = %err, "{context}: store connection failed");
        manager.invalidate();
    }

    AppError::with_source(ErrorKind::StoreUnavailable, format!("{context}: {err}"), err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_connection_errors() {
        assert!(is_connection_error(&sqlx::Error::PoolTimedOut));
        assert!(is_connection_error(&sqlx::Error::PoolClosed));
        assert!(!is_connection_error(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn test_decode_errors_are_internal() {
        let manager = crate::connection::manager(&Default::default());

        let err = map_sqlx_error(
            &manager,
            "Failed to find resume",
            sqlx::Error::Decode("invalid type: null, expected a string".into()),
        );
        assert_eq!(err.kind, ErrorKind::Internal);
        assert!(!err.kind.is_retryable());

        let err = map_sqlx_error(
            &manager,
            "Failed to list resumes",
            sqlx::Error::ColumnNotFound("document".to_string()),
        );
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(manager.attempts(), 0);
    }

    #[test]
    fn test_pool_timeout_is_store_unavailable() {
        let manager = crate::connection::manager(&Default::default());
        let err = map_sqlx_error(&manager, "Failed to find share", sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind, ErrorKind::StoreUnavailable);
        assert!(err.kind.is_retryable());
    }
}
