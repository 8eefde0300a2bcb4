//! Google sign-in, session token storage, and profile lookup.

pub mod backend;
pub mod device_code;
pub mod error;
pub mod profile;
pub mod providers;
pub mod session;
pub mod store;
pub mod token;
pub mod view;

pub use backend::BackendClient;
pub use device_code::{DeviceCodePoll, DeviceCodeSession};
pub use error::AuthError;
pub use profile::UserProfile;
pub use providers::IdentityProvider;
pub use session::AuthSession;
pub use store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StoreConfig};
pub use token::{OAuthAccessToken, SessionToken, SESSION_TOKEN_KEY};
pub use view::View;
