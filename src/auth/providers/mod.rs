//! Identity providers that run an OAuth consent flow.

pub mod google;

use async_trait::async_trait;

use super::error::AuthError;
use super::token::OAuthAccessToken;

/// Scopes requested by the sign-in flow.
pub const LOGIN_SCOPES: &[&str] = &["openid", "email", "profile"];

/// An OAuth identity provider able to obtain a user-approved access token.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Run the consent flow for `scopes` and return the provider access token.
    async fn authorize(&self, scopes: &[&str]) -> Result<OAuthAccessToken, AuthError>;
}
