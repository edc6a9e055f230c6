//! Configuration structures
//!
//! Every section has defaults, so a missing file or a partial file still
//! yields a usable configuration pointing at the public platform.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AUTH_URL, DEFAULT_BIND_ADDR, DEFAULT_EVENT_ID, DEFAULT_GRAPHQL_URL,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOKEN_SLOT,
};
use crate::impl_domain_status_conversions;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub platform: PlatformConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

/// Remote learning-platform endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Sign-in endpoint accepting basic auth
    pub auth_url: String,
    /// GraphQL endpoint accepting bearer tokens
    pub graphql_url: String,
    /// Event (course module) the XP, level and skill queries are scoped to
    pub event_id: i64,
    pub timeout_secs: u64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            event_id: DEFAULT_EVENT_ID,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Local web server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_string() }
    }
}

/// Where the session token is cached between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenBackend {
    /// Plain-text file named after the slot
    #[default]
    File,
    /// System keyring entry
    Keyring,
    /// Process memory only; nothing survives a restart
    Memory,
}

impl_domain_status_conversions!(TokenBackend {
    File => "file",
    Keyring => "keyring",
    Memory => "memory",
});

/// Token persistence slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: TokenBackend,
    /// Fixed name of the persistence slot
    pub slot_name: String,
    /// Directory for the file backend. `None` means the platform data
    /// directory resolved by the loader.
    pub directory: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: TokenBackend::File,
            slot_name: DEFAULT_TOKEN_SLOT.to_string(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "platform": { "event_id": 12 } }"#).unwrap();

        assert_eq!(config.platform.event_id, 12);
        assert_eq!(config.platform.auth_url, DEFAULT_AUTH_URL);
        assert_eq!(config.server.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.storage.slot_name, DEFAULT_TOKEN_SLOT);
        assert_eq!(config.storage.backend, TokenBackend::File);
    }

    #[test]
    fn token_backend_parses_from_strings() {
        assert_eq!("keyring".parse::<TokenBackend>().unwrap(), TokenBackend::Keyring);
        assert_eq!("Memory".parse::<TokenBackend>().unwrap(), TokenBackend::Memory);
        assert!("redis".parse::<TokenBackend>().is_err());

        let storage: StorageConfig = serde_json::from_str(r#"{ "backend": "keyring" }"#).unwrap();
        assert_eq!(storage.backend, TokenBackend::Keyring);
    }
}
