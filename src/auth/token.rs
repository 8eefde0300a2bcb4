use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage key under which the session token is persisted.
pub const SESSION_TOKEN_KEY: &str = "authToken";

/// Opaque backend-issued session credential.
///
/// Validity cannot be checked locally; only a successful profile fetch
/// confirms it. `Debug` is redacted so the value never lands in logs.
///
/// # Example
/// ```
/// use vtrade_auth::auth::SessionToken;
///
/// let token = SessionToken::new("9c1d0e");
/// assert_eq!(token.as_str(), "9c1d0e");
/// assert_eq!(format!("{token:?}"), "SessionToken(..)");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header the backend expects.
    pub fn authorization_header(&self) -> String {
        format!("Token {}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Short-lived credential returned by the identity provider after consent.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthAccessToken(String);

impl OAuthAccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OAuthAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OAuthAccessToken(..)")
    }
}
