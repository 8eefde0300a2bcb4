use chrono::{DateTime, Utc};

use super::token::OAuthAccessToken;

/// Device-code session details returned when a consent flow starts.
///
/// # Example
/// ```no_run
/// use vtrade_auth::auth::DeviceCodeSession;
/// use chrono::Utc;
///
/// let session = DeviceCodeSession {
///     verification_url: "https://www.google.com/device".to_string(),
///     user_code: "GQVQ-JKEC".to_string(),
///     device_code: "AH-1Ng2".to_string(),
///     interval_secs: 5,
///     expires_at: Utc::now(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DeviceCodeSession {
    pub verification_url: String,
    pub user_code: String,
    pub device_code: String,
    pub interval_secs: u64,
    pub expires_at: DateTime<Utc>,
}

/// Polling outcome for a device-code session.
#[derive(Debug, Clone)]
pub enum DeviceCodePoll {
    Pending { interval_secs: u64 },
    SlowDown { interval_secs: u64 },
    Authorized { token: OAuthAccessToken },
    AccessDenied,
    Expired,
}
