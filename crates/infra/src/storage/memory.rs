//! In-process token slot for tests and ephemeral runs

use async_trait::async_trait;
use learnboard_core::TokenStore;
use learnboard_domain::Result;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, token: &str) -> Result<()> {
        *self.slot.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.slot.write().await = None;
        Ok(())
    }
}
