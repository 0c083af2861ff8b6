//! Opaque resume snapshot carried by a share link.

use serde::{Deserialize, Serialize};

use resumehub_core::error::AppError;
use resumehub_core::result::AppResult;

/// Resume data frozen into a share link.
///
/// The payload is never checked against the resume schema; only its
/// presence and serialized size are bounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeSnapshot(serde_json::Value);

impl ResumeSnapshot {
    /// Accept a payload if it is non-null and at most `max_bytes` once serialized.
    pub fn new(value: serde_json::Value, max_bytes: usize) -> AppResult<Self> {
        if value.is_null() {
            return Err(AppError::invalid_field("resumeData", "is required"));
        }

        let size = serde_json::to_vec(&value)?.len();
        if size > max_bytes {
            return Err(AppError::invalid_field(
                "resumeData",
                format!("is {size} bytes, limit is {max_bytes}"),
            ));
        }

        Ok(Self(value))
    }

    /// Wrap a payload read back from the store.
    pub fn from_stored(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumehub_core::error::ErrorKind;

    #[test]
    fn test_accepts_arbitrary_shape() {
        let value = serde_json::json!({ "anything": [1, 2, { "nested": true }] });
        let snapshot = ResumeSnapshot::new(value.clone(), 1024).expect("snapshot");
        assert_eq!(snapshot.as_value(), &value);
    }

    #[test]
    fn test_rejects_null() {
        let err = ResumeSnapshot::new(serde_json::Value::Null, 1024).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_rejects_oversized_payload() {
        let value = serde_json::json!({ "blob": "x".repeat(200) });
        let err = ResumeSnapshot::new(value, 64).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.details.is_some());
    }
}
