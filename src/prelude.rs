//! Convenience re-exports for common use.

pub use crate::auth::{
    AuthError, AuthSession, BackendClient, FileKeyValueStore, IdentityProvider, KeyValueStore,
    MemoryKeyValueStore, SessionToken, UserProfile, View,
};
pub use crate::config::AuthConfig;
pub use crate::error::{Error, Result};
