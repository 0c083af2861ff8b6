//! Acknowledgement returned by delete operations.

use serde::{Deserialize, Serialize};

/// `{success, message}` body for operations with no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Whether the operation took effect.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl Acknowledgement {
    /// A successful acknowledgement with `message`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
