//! Request DTOs.

use serde::{Deserialize, Serialize};

pub use resumehub_service::{CreateShareRequest, UpdateShareRequest};

/// `?includeInactive=` on resume listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResumesQuery {
    /// Also return soft-deleted resumes.
    #[serde(default)]
    pub include_inactive: bool,
}
