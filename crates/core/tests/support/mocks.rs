//! In-memory port implementations

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use learnboard_core::{AuthGateway, ProfileSource, TokenStore};
use learnboard_domain::{Credentials, LearnboardError, ProfileRecord, Result as DomainResult};

/// Gateway accepting exactly one username/password pair.
pub struct MockAuthGateway {
    username: String,
    password: String,
    body: String,
}

impl MockAuthGateway {
    pub fn accepting(username: &str, password: &str, body: &str) -> Self {
        Self { username: username.into(), password: password.into(), body: body.into() }
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn sign_in(&self, credentials: &Credentials) -> DomainResult<String> {
        let expected = Credentials::new(self.username.clone(), self.password.clone());
        if credentials.basic_auth_header() == expected.basic_auth_header() {
            Ok(self.body.clone())
        } else {
            Err(LearnboardError::InvalidCredentials)
        }
    }
}

/// Token slot held in memory
#[derive(Default)]
pub struct MockTokenStore {
    slot: Mutex<Option<String>>,
}

impl MockTokenStore {
    pub fn holding(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.into())) }
    }

    pub fn stored(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn load(&self) -> DomainResult<Option<String>> {
        Ok(self.stored())
    }

    async fn save(&self, token: &str) -> DomainResult<()> {
        *self.slot.lock().unwrap() = Some(token.into());
        Ok(())
    }

    async fn clear(&self) -> DomainResult<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

/// Profile source answering every fetch with the same result
pub struct MockProfileSource {
    response: DomainResult<ProfileRecord>,
    tokens: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockProfileSource {
    pub fn returning(profile: ProfileRecord) -> Self {
        Self::with_response(Ok(profile))
    }

    pub fn failing(error: LearnboardError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: DomainResult<ProfileRecord>) -> Self {
        Self { response, tokens: Mutex::new(Vec::new()), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileSource for MockProfileSource {
    async fn fetch_profile(&self, token: &str) -> DomainResult<ProfileRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.lock().unwrap().push(token.into());
        self.response.clone()
    }
}
