//! Configuration (layered: code > env > defaults).

use std::path::PathBuf;

use crate::auth::providers::google::{DevicePrompt, GoogleDeviceAuth};
use crate::auth::store::{FileKeyValueStore, StoreConfig};
use crate::auth::BackendClient;
use crate::error::{Error, Result};

pub const CLIENT_ID_VAR: &str = "GOOGLE_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "GOOGLE_CLIENT_SECRET";
pub const API_BASE_URL_VAR: &str = "VTRADE_API_BASE_URL";
pub const HOME_VAR: &str = "VTRADE_HOME";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Settings needed to build a sign-in session.
#[derive(Clone)]
pub struct AuthConfig {
    client_id: Option<String>,
    client_secret: Option<String>,
    api_base_url: String,
    home_dir: PathBuf,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| ".."))
            .field("api_base_url", &self.api_base_url)
            .field("home_dir", &self.home_dir)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthConfig {
    /// Defaults only: no client id, local backend, `~/.vtrade`.
    pub fn new() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            home_dir: StoreConfig::default_dir(),
        }
    }

    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::new();
        config.client_id = get(CLIENT_ID_VAR);
        config.client_secret = get(CLIENT_SECRET_VAR);
        if let Some(url) = get(API_BASE_URL_VAR) {
            config.api_base_url = url;
        }
        if let Some(dir) = get(HOME_VAR) {
            config.home_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = dir.into();
        self
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn home_dir(&self) -> &PathBuf {
        &self.home_dir
    }

    /// The OAuth client id, or a configuration error naming the variable.
    pub fn require_client_id(&self) -> Result<&str> {
        self.client_id
            .as_deref()
            .ok_or_else(|| Error::Configuration(format!("{CLIENT_ID_VAR} is not set")))
    }

    pub fn store(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(StoreConfig::new(self.home_dir.clone()))
    }

    pub fn backend(&self) -> BackendClient {
        BackendClient::new(self.api_base_url.clone())
    }

    /// Google device-flow provider for the configured client.
    pub fn google_provider(&self, prompt: Option<DevicePrompt>) -> Result<GoogleDeviceAuth> {
        let mut auth = GoogleDeviceAuth::new(self.require_client_id()?);
        if let Some(secret) = &self.client_secret {
            auth = auth.with_client_secret(secret.clone());
        }
        if let Some(prompt) = prompt {
            auth = auth.with_prompt(prompt);
        }
        Ok(auth)
    }
}
