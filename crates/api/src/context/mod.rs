//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use learnboard_core::{
    AuthGateway, DashboardController, ProfileSource, Renderer, SessionManager, TokenStore,
};
use learnboard_domain::{Config, Result, TokenBackend};
use learnboard_infra::config::resolve_token_directory;
use learnboard_infra::{
    FileTokenStore, HttpClient, KeyringTokenStore, MemoryTokenStore, PlatformAuthGateway,
    PlatformProfileClient,
};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub session: Arc<SessionManager>,
    pub dashboard: Arc<DashboardController>,
}

impl AppContext {
    /// Wire every adapter from `config`. No I/O happens here.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.platform.timeout_secs))
            .user_agent(concat!("learnboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let gateway: Arc<dyn AuthGateway> =
            Arc::new(PlatformAuthGateway::new(&config.platform.auth_url, http_client.clone()));
        let profiles: Arc<dyn ProfileSource> = Arc::new(PlatformProfileClient::new(
            &config.platform.graphql_url,
            config.platform.event_id,
            http_client,
        ));
        let token_store = create_token_store(&config);

        let session = Arc::new(SessionManager::new(gateway, token_store));
        let dashboard =
            Arc::new(DashboardController::new(session.clone(), profiles, Renderer::default()));

        Ok(Self { config, session, dashboard })
    }

    /// Build the context and adopt a token left by a previous run.
    pub async fn start(config: Config) -> Result<Self> {
        let ctx = Self::new(config)?;
        let restored = ctx.session.restore().await;
        info!(restored, backend = %ctx.config.storage.backend, "Application context ready");
        Ok(ctx)
    }
}

fn create_token_store(config: &Config) -> Arc<dyn TokenStore> {
    let slot = config.storage.slot_name.trim();
    match config.storage.backend {
        TokenBackend::File => {
            let directory = resolve_token_directory(&config.storage);
            info!(directory = %directory.display(), slot, "Using file token store");
            Arc::new(FileTokenStore::new(directory, slot))
        }
        TokenBackend::Keyring => {
            info!(slot, "Using keyring token store");
            Arc::new(KeyringTokenStore::new(slot))
        }
        TokenBackend::Memory => {
            info!("Using in-memory token store");
            Arc::new(MemoryTokenStore::new())
        }
    }
}
