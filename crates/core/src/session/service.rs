//! Session manager - owns the current authentication token

use std::sync::Arc;

use learnboard_domain::{clean_token, extract_token, Credentials, LearnboardError, Result};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::ports::{AuthGateway, TokenStore};

/// Session manager
///
/// Holds at most one token. The in-memory copy is authoritative; the
/// token store mirrors it so a restart can pick the session back up.
pub struct SessionManager {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn TokenStore>,
    token: RwLock<Option<String>>,
}

impl SessionManager {
    /// Create a new session manager with no active session
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn TokenStore>) -> Self {
        Self { gateway, store, token: RwLock::new(None) }
    }

    /// Adopt a token left in the store by a previous run.
    ///
    /// Returns whether a session is active afterwards. A store that cannot
    /// be read is treated as empty.
    pub async fn restore(&self) -> bool {
        let stored = match self.store.load().await {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "Failed to read stored session token");
                None
            }
        };

        let token = stored.map(|raw| clean_token(&raw)).filter(|token| !token.is_empty());
        let restored = token.is_some();
        *self.token.write().await = token;

        if restored {
            info!("Restored stored session");
        } else {
            debug!("No stored session to restore");
        }
        restored
    }

    /// Sign in and store the issued token.
    ///
    /// Every failure surfaces as `InvalidCredentials`; the underlying cause
    /// is only logged.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let credentials = Credentials::new(username, password);

        let body = self.gateway.sign_in(&credentials).await.map_err(|err| {
            warn!(error = %err, "Sign-in rejected");
            LearnboardError::InvalidCredentials
        })?;
        let token = extract_token(&body).map_err(|_| {
            warn!("Sign-in response did not carry a token");
            LearnboardError::InvalidCredentials
        })?;

        *self.token.write().await = Some(token.clone());
        if let Err(err) = self.store.save(&token).await {
            warn!(error = %err, "Failed to persist session token");
        }

        info!("Signed in");
        Ok(token)
    }

    /// Drop the in-memory token and empty the store.
    pub async fn logout(&self) {
        *self.token.write().await = None;
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "Failed to clear stored session token");
        }
        info!("Signed out");
    }

    /// Current token, if signed in
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }
}
