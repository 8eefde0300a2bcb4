//! vtrade-auth: Google sign-in for the vtrade backend.
//!
//! Runs the Google OAuth consent flow, trades the resulting access token for a
//! backend session token, keeps that token in a persistent key-value store,
//! and loads the signed-in user's profile with it.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use vtrade_auth::auth::AuthSession;
//! use vtrade_auth::config::AuthConfig;
//!
//! # async fn example() -> vtrade_auth::error::Result<()> {
//! let config = AuthConfig::from_env();
//! let provider = config.google_provider(None)?;
//! let mut session = AuthSession::new(Arc::new(config.store()), config.backend())
//!     .with_provider(Arc::new(provider));
//! session.initialize().await;
//! if session.user().is_none() {
//!     session.login().await;
//! }
//! println!("{}", session.view());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod prelude;

#[cfg(feature = "cli")]
pub mod cli;
