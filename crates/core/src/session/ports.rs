//! Port interfaces for authentication
//!
//! These traits define the boundaries between the session manager
//! and infrastructure implementations.

use async_trait::async_trait;
use learnboard_domain::{Credentials, Result};

/// Remote sign-in endpoint
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for the raw response body of a successful
    /// sign-in. Any non-OK answer fails with `InvalidCredentials`.
    async fn sign_in(&self, credentials: &Credentials) -> Result<String>;
}

/// Single named slot holding the session token as plain text
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the stored token, `None` when the slot is empty
    async fn load(&self) -> Result<Option<String>>;

    /// Overwrite the slot
    async fn save(&self, token: &str) -> Result<()>;

    /// Empty the slot. Clearing an empty slot succeeds.
    async fn clear(&self) -> Result<()>;
}
