//! Sign-in endpoint client

use async_trait::async_trait;
use learnboard_core::AuthGateway;
use learnboard_domain::{Credentials, LearnboardError, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, instrument, warn};

use crate::http::HttpClient;

/// Basic-auth sign-in against the platform's auth endpoint
pub struct PlatformAuthGateway {
    auth_url: String,
    http_client: HttpClient,
}

impl PlatformAuthGateway {
    pub fn new(auth_url: impl Into<String>, http_client: HttpClient) -> Self {
        Self { auth_url: auth_url.into(), http_client }
    }
}

#[async_trait]
impl AuthGateway for PlatformAuthGateway {
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    async fn sign_in(&self, credentials: &Credentials) -> Result<String> {
        let request = self
            .http_client
            .request(Method::POST, &self.auth_url)
            .header(AUTHORIZATION, credentials.basic_auth_header())
            .header(CONTENT_TYPE, "application/json");

        let response = self.http_client.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Sign-in endpoint rejected credentials");
            return Err(LearnboardError::InvalidCredentials);
        }

        let body = response.text().await.map_err(|err| {
            warn!(error = %err, "Failed to read sign-in response body");
            LearnboardError::InvalidCredentials
        })?;
        debug!(body_len = body.len(), "Sign-in accepted");
        Ok(body)
    }
}
