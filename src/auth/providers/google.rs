use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::Deserialize;

use crate::auth::device_code::{DeviceCodePoll, DeviceCodeSession};
use crate::auth::error::AuthError;
use crate::auth::providers::IdentityProvider;
use crate::auth::token::OAuthAccessToken;

const DEFAULT_DEVICE_CODE_URL: &str = "https://oauth2.googleapis.com/device/code";
const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEVICE_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:device_code";
const SLOW_DOWN_STEP_SECS: u64 = 5;

/// Callback that shows the verification URL and user code to the user.
pub type DevicePrompt = Arc<dyn Fn(&DeviceCodeSession) + Send + Sync>;

/// Google sign-in using the OAuth device-authorization grant.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use vtrade_auth::auth::providers::google::GoogleDeviceAuth;
/// use vtrade_auth::auth::DeviceCodeSession;
///
/// let auth = GoogleDeviceAuth::new("1234.apps.googleusercontent.com")
///     .with_prompt(Arc::new(|session: &DeviceCodeSession| {
///         println!("Visit {} and enter {}", session.verification_url, session.user_code);
///     }));
/// ```
pub struct GoogleDeviceAuth {
    client: reqwest::Client,
    client_id: String,
    client_secret: Option<String>,
    device_code_url: String,
    token_url: String,
    prompt: Option<DevicePrompt>,
}

impl GoogleDeviceAuth {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.into(),
            client_secret: None,
            device_code_url: DEFAULT_DEVICE_CODE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            prompt: None,
        }
    }

    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    pub fn with_device_code_url(mut self, url: impl Into<String>) -> Self {
        self.device_code_url = url.into();
        self
    }

    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    pub fn with_prompt(mut self, prompt: DevicePrompt) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub async fn start_device_code(
        &self,
        scopes: &[&str],
    ) -> Result<DeviceCodeSession, AuthError> {
        let scope = scopes.join(" ");
        tracing::debug!(url = %self.device_code_url, %scope, "requesting device code");
        let resp = self
            .client
            .post(&self.device_code_url)
            .header("Accept", "application/json")
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("scope", scope.as_str()),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(AuthError::InvalidResponse(format!(
                "Device code request failed with status {}",
                resp.status()
            )));
        }
        let payload: GoogleDeviceCodeResponse = resp.json().await?;
        let expires_at = Utc::now() + Duration::seconds(payload.expires_in as i64);
        Ok(DeviceCodeSession {
            verification_url: payload.verification_url,
            user_code: payload.user_code,
            device_code: payload.device_code,
            interval_secs: payload.interval,
            expires_at,
        })
    }

    pub async fn poll_device_code(
        &self,
        session: &DeviceCodeSession,
    ) -> Result<DeviceCodePoll, AuthError> {
        if Utc::now() >= session.expires_at {
            return Ok(DeviceCodePoll::Expired);
        }
        let mut form = vec![
            ("client_id", self.client_id.as_str()),
            ("device_code", session.device_code.as_str()),
            ("grant_type", DEVICE_GRANT_TYPE),
        ];
        if let Some(secret) = self.client_secret.as_deref() {
            form.push(("client_secret", secret));
        }
        let resp = self
            .client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&form)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        // Google reports pending/slow_down/denied with 4xx statuses and an OAuth error body.
        let payload: GoogleTokenResponse = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(_) if !status.is_success() => {
                return Err(AuthError::InvalidResponse(format!(
                    "Device token request failed with status {status}"
                )));
            }
            Err(err) => return Err(err.into()),
        };
        if let Some(access_token) = payload.access_token.filter(|_| status.is_success()) {
            return Ok(DeviceCodePoll::Authorized {
                token: OAuthAccessToken::new(access_token),
            });
        }
        match payload.error.as_deref() {
            Some("authorization_pending") => Ok(DeviceCodePoll::Pending {
                interval_secs: session.interval_secs,
            }),
            Some("slow_down") => Ok(DeviceCodePoll::SlowDown {
                interval_secs: session.interval_secs + SLOW_DOWN_STEP_SECS,
            }),
            Some("expired_token") | Some("invalid_grant") => Ok(DeviceCodePoll::Expired),
            Some("access_denied") => Ok(DeviceCodePoll::AccessDenied),
            Some(other) => Err(AuthError::InvalidResponse(format!(
                "Device code error: {other}"
            ))),
            None => Err(AuthError::InvalidResponse(format!(
                "Device token response (status {status}) missing token and error"
            ))),
        }
    }
}

#[async_trait]
impl IdentityProvider for GoogleDeviceAuth {
    async fn authorize(&self, scopes: &[&str]) -> Result<OAuthAccessToken, AuthError> {
        let mut session = self.start_device_code(scopes).await?;
        if let Some(prompt) = &self.prompt {
            prompt(&session);
        }
        loop {
            tokio::time::sleep(StdDuration::from_secs(session.interval_secs)).await;
            match self.poll_device_code(&session).await? {
                DeviceCodePoll::Authorized { token } => return Ok(token),
                DeviceCodePoll::Pending { .. } => continue,
                DeviceCodePoll::SlowDown { interval_secs } => {
                    tracing::debug!(interval_secs, "device code polling slowed down");
                    session.interval_secs = interval_secs;
                }
                DeviceCodePoll::AccessDenied => return Err(AuthError::AccessDenied),
                DeviceCodePoll::Expired => return Err(AuthError::ExpiredOrInvalidGrant),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleDeviceCodeResponse {
    device_code: String,
    user_code: String,
    verification_url: String,
    expires_in: u64,
    #[serde(default = "default_interval")]
    interval: u64,
}

fn default_interval() -> u64 {
    5
}

#[derive(Debug, Deserialize)]
struct GoogleTokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}
