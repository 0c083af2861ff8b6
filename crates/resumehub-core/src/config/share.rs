//! Share link configuration.

use serde::{Deserialize, Serialize};

/// Shortest accepted `share.id_length`.
pub const MIN_SHARE_ID_LENGTH: usize = 8;

/// Longest accepted `share.id_length`. Lookups reject longer identifiers.
pub const MAX_SHARE_ID_LENGTH: usize = 64;

/// Settings for public share links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Public base URL used to build `{base_url}/share/{share_id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Length of generated share identifiers.
    #[serde(default = "default_id_length")]
    pub id_length: usize,
    /// Maximum serialized size of a resume snapshot in bytes.
    #[serde(default = "default_max_snapshot_bytes")]
    pub max_snapshot_bytes: usize,
    /// Expose the unauthenticated debug listing over HTTP.
    #[serde(default)]
    pub debug_endpoints: bool,
    /// Number of links returned by the debug listing.
    #[serde(default = "default_debug_list_limit")]
    pub debug_list_limit: i64,
    /// Interval between expired-link purges, in seconds. `0` disables the sweep.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl ShareConfig {
    /// Base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            id_length: default_id_length(),
            max_snapshot_bytes: default_max_snapshot_bytes(),
            debug_endpoints: false,
            debug_list_limit: default_debug_list_limit(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_id_length() -> usize {
    12
}

fn default_max_snapshot_bytes() -> usize {
    1024 * 1024
}

fn default_debug_list_limit() -> i64 {
    20
}

fn default_sweep_interval() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ShareConfig {
            base_url: "https://cv.example.com/".to_string(),
            ..ShareConfig::default()
        };
        assert_eq!(config.normalized_base_url(), "https://cv.example.com");
    }
}
