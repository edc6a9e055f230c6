//! Port interface for the profile backend

use async_trait::async_trait;
use learnboard_domain::{ProfileRecord, Result};

/// Source of normalized student profiles
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch and normalize the profile of the token's owner.
    ///
    /// Fails with `Transport`, `Query` or `DataIntegrity`.
    async fn fetch_profile(&self, token: &str) -> Result<ProfileRecord>;
}
