//! Error types for vtrade-auth.

use thiserror::Error;

use crate::auth::AuthError;

/// Primary error type for configuration and CLI plumbing.
///
/// [`AuthSession`](crate::auth::AuthSession) never returns these; its
/// collaborators do, and the session logs them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Auth(AuthError),
}

impl Error {
    /// Whether re-running the command after fixing the environment could help.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;
