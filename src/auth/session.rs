use std::sync::Arc;

use super::backend::BackendClient;
use super::profile::UserProfile;
use super::providers::{IdentityProvider, LOGIN_SCOPES};
use super::store::KeyValueStore;
use super::token::{SessionToken, SESSION_TOKEN_KEY};
use super::view::View;

/// Sign-in state for one user: the stored session token plus the profile it unlocks.
///
/// Operations never return errors. Failures are logged through `tracing` and
/// leave the session unauthenticated. Every operation takes `&mut self`, so
/// handlers run one at a time; nothing guards against two sessions sharing a
/// store, in which case the last successful write wins.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use vtrade_auth::auth::{AuthSession, BackendClient, FileKeyValueStore};
/// use vtrade_auth::auth::providers::google::GoogleDeviceAuth;
///
/// # async fn example() {
/// let mut session = AuthSession::new(
///     Arc::new(FileKeyValueStore::new_default()),
///     BackendClient::new("http://127.0.0.1:8000"),
/// )
/// .with_provider(Arc::new(GoogleDeviceAuth::new("1234.apps.googleusercontent.com")));
/// session.initialize().await;
/// if session.user().is_none() {
///     session.login().await;
/// }
/// println!("{}", session.view());
/// # }
/// ```
pub struct AuthSession {
    store: Arc<dyn KeyValueStore>,
    backend: BackendClient,
    provider: Option<Arc<dyn IdentityProvider>>,
    user: Option<UserProfile>,
}

impl AuthSession {
    /// A session that can restore and drop sign-ins but cannot log in until
    /// a provider is attached.
    pub fn new(store: Arc<dyn KeyValueStore>, backend: BackendClient) -> Self {
        Self {
            store,
            backend,
            provider: None,
            user: None,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// The signed-in user's profile, if the last fetch succeeded.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Restore a previous sign-in: fetch the profile if a non-empty token is stored.
    pub async fn initialize(&mut self) {
        let stored = match self.store.get(SESSION_TOKEN_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored session token");
                None
            }
        };
        if let Some(value) = stored.filter(|v| !v.is_empty()) {
            self.fetch_profile(&SessionToken::new(value)).await;
        }
    }

    /// Load the profile for `token`; on any failure forget the token.
    pub async fn fetch_profile(&mut self, token: &SessionToken) {
        match self.backend.fetch_user(token).await {
            Ok(profile) => {
                tracing::debug!(email = %profile.email, "fetched user details");
                self.user = Some(profile);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch user details");
                if let Err(e) = self.store.delete(SESSION_TOKEN_KEY) {
                    tracing::warn!(error = %e, "failed to remove stored session token");
                }
                self.user = None;
            }
        }
    }

    /// Run the provider consent flow, exchange its token, store the result,
    /// then fetch the profile. A token that cannot be stored is never used.
    pub async fn login(&mut self) {
        let Some(provider) = self.provider.clone() else {
            tracing::error!("google login failed: no identity provider configured");
            return;
        };
        let access_token = match provider.authorize(LOGIN_SCOPES).await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!(error = %e, "google login failed");
                return;
            }
        };
        let session_token = match self.backend.exchange_google_token(&access_token).await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!(error = %e, "login failed");
                return;
            }
        };
        if let Err(e) = self.store.set(SESSION_TOKEN_KEY, session_token.as_str()) {
            tracing::error!(error = %e, "login failed: could not persist session token");
            return;
        }
        self.fetch_profile(&session_token).await;
    }

    /// Forget the stored token and profile. Makes no network calls.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.delete(SESSION_TOKEN_KEY) {
            tracing::warn!(error = %e, "failed to remove stored session token");
        }
        self.user = None;
    }

    pub fn view(&self) -> View {
        View::from_user(self.user.as_ref())
    }
}
