use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::profile::UserProfile;
use super::token::{OAuthAccessToken, SessionToken};

const GOOGLE_LOGIN_PATH: &str = "/auth/google/";
const USER_DETAILS_PATH: &str = "/auth/user/";

/// HTTP client for the backend's auth endpoints.
///
/// # Example
/// ```no_run
/// use vtrade_auth::auth::{BackendClient, SessionToken};
///
/// # async fn example() -> Result<(), vtrade_auth::auth::AuthError> {
/// let backend = BackendClient::new("http://127.0.0.1:8000");
/// let profile = backend.fetch_user(&SessionToken::new("9c1d0e")).await?;
/// println!("{}", profile.email);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Trade a Google access token for a backend session token.
    pub async fn exchange_google_token(
        &self,
        access_token: &OAuthAccessToken,
    ) -> Result<SessionToken, AuthError> {
        let url = format!("{}{GOOGLE_LOGIN_PATH}", self.base_url);
        tracing::debug!(%url, "exchanging google access token");
        let resp = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&GoogleLoginRequest {
                access_token: access_token.as_str(),
            })
            .send()
            .await?;
        let resp = check_status(resp, "Token exchange").await?;
        let payload: GoogleLoginResponse = resp.json().await?;
        if payload.key.trim().is_empty() {
            return Err(AuthError::InvalidResponse(
                "Token exchange returned an empty key".to_string(),
            ));
        }
        Ok(SessionToken::new(payload.key))
    }

    /// Fetch the profile of the user owning `token`.
    pub async fn fetch_user(&self, token: &SessionToken) -> Result<UserProfile, AuthError> {
        let url = format!("{}{USER_DETAILS_PATH}", self.base_url);
        tracing::debug!(%url, "fetching user details");
        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("Authorization", token.authorization_header())
            .send()
            .await?;
        let resp = check_status(resp, "User details request").await?;
        Ok(resp.json().await?)
    }
}

async fn check_status(
    resp: reqwest::Response,
    what: &str,
) -> Result<reqwest::Response, AuthError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(AuthError::ExpiredOrInvalidGrant);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        format!("{what} failed")
    } else {
        body
    };
    Err(AuthError::Api {
        status: status.as_u16(),
        message,
    })
}

#[derive(Debug, Serialize)]
struct GoogleLoginRequest<'a> {
    access_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct GoogleLoginResponse {
    key: String,
}
