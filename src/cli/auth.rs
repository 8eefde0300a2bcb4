//! CLI handlers for login, status, and logout.

use std::sync::Arc;

use crate::auth::providers::google::DevicePrompt;
use crate::auth::{AuthSession, DeviceCodeSession, View};
use crate::config::AuthConfig;
use crate::error::Result;

fn session(config: &AuthConfig) -> AuthSession {
    AuthSession::new(Arc::new(config.store()), config.backend())
}

fn print_device_code(session: &DeviceCodeSession) {
    println!("🔗 Visit: {}", session.verification_url);
    println!("📋 Enter code: {}", session.user_code);
    println!("⏳ Waiting for authorization...");
}

/// Handle `vtrade-auth login`.
pub async fn handle_login(config: &AuthConfig) -> Result<View> {
    let prompt: DevicePrompt = Arc::new(print_device_code);
    let provider = config.google_provider(Some(prompt))?;
    let mut session = session(config).with_provider(Arc::new(provider));
    session.login().await;
    Ok(session.view())
}

/// Handle `vtrade-auth status`.
pub async fn handle_status(config: &AuthConfig) -> Result<View> {
    let mut session = session(config);
    session.initialize().await;
    Ok(session.view())
}

/// Handle `vtrade-auth logout`.
pub async fn handle_logout(config: &AuthConfig) -> Result<View> {
    let mut session = session(config);
    session.logout();
    Ok(session.view())
}
