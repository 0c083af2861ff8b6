//! Request context carrying the caller's network origin and device class.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback when no client address can be determined.
pub const UNKNOWN_IP: &str = "127.0.0.1";

const MOBILE_MARKERS: &[&str] = &[
    "mobile",
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "windows phone",
    "opera mini",
    "iemobile",
];

/// Context for the current request.
///
/// Built by the HTTP layer and passed into service methods, which use it
/// for logging only. No operation depends on it for authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Client IP address.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// Whether the User-Agent looks like a phone or tablet.
    pub is_mobile: bool,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(ip_address: Option<String>, user_agent: Option<String>) -> Self {
        let is_mobile = user_agent.as_deref().is_some_and(is_mobile_user_agent);
        Self {
            ip_address: ip_address
                .filter(|ip| !ip.is_empty())
                .unwrap_or_else(|| UNKNOWN_IP.to_string()),
            user_agent,
            is_mobile,
            request_time: Utc::now(),
        }
    }

    /// Context for calls that do not come from an HTTP client, such as
    /// the admin CLI.
    pub fn internal(source: &str) -> Self {
        Self::new(None, Some(source.to_string()))
    }
}

/// Whether `user_agent` identifies a mobile device.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ip_falls_back_to_loopback() {
        let ctx = RequestContext::new(None, None);
        assert_eq!(ctx.ip_address, UNKNOWN_IP);
        assert!(!ctx.is_mobile);

        let ctx = RequestContext::new(Some(String::new()), None);
        assert_eq!(ctx.ip_address, UNKNOWN_IP);
    }

    #[test]
    fn test_mobile_detection() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36"
        ));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
        ));
    }

    #[test]
    fn test_context_records_device_class() {
        let ctx = RequestContext::new(
            Some("203.0.113.7".to_string()),
            Some("Mozilla/5.0 (iPad; CPU OS 17_0)".to_string()),
        );
        assert_eq!(ctx.ip_address, "203.0.113.7");
        assert!(ctx.is_mobile);
    }
}
