//! Token slot in the system keyring

use async_trait::async_trait;
use keyring::Entry;
use learnboard_core::TokenStore;
use learnboard_domain::constants::KEYRING_SERVICE_NAME;
use learnboard_domain::{LearnboardError, Result};
use tracing::debug;

use crate::errors::InfraError;

/// Keyring entry with service `com.learnboard.app` and the slot name as
/// account.
#[derive(Debug, Clone)]
pub struct KeyringTokenStore {
    service: String,
    account: String,
}

impl KeyringTokenStore {
    pub fn new(slot_name: impl Into<String>) -> Self {
        Self::with_service(KEYRING_SERVICE_NAME, slot_name)
    }

    pub fn with_service(service: impl Into<String>, slot_name: impl Into<String>) -> Self {
        Self { service: service.into(), account: slot_name.into() }
    }

    /// Run a keyring operation off the async runtime.
    async fn with_entry<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(Entry) -> std::result::Result<T, keyring::Error> + Send + 'static,
    {
        let service = self.service.clone();
        let account = self.account.clone();
        tokio::task::spawn_blocking(move || {
            let entry = Entry::new(&service, &account).map_err(InfraError::from)?;
            op(entry).map_err(InfraError::from)
        })
        .await
        .map_err(|err| LearnboardError::Internal(format!("keyring task failed: {err}")))?
        .map_err(LearnboardError::from)
    }
}

#[async_trait]
impl TokenStore for KeyringTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        self.with_entry(|entry| match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err),
        })
        .await
    }

    async fn save(&self, token: &str) -> Result<()> {
        let token = token.to_string();
        self.with_entry(move |entry| entry.set_password(&token)).await?;
        debug!(account = %self.account, "Stored session token in keyring");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.with_entry(|entry| match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err),
        })
        .await
    }
}
