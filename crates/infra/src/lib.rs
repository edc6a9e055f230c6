//! # Learnboard Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client and the learning-platform integration (sign-in, GraphQL)
//! - Token stores (file, system keyring, memory)
//! - SVG and HTML display adapters
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `learnboard-core`
//! - Contains all "impure" code (network, filesystem, keyring)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod render;
pub mod storage;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::{PlatformAuthGateway, PlatformProfileClient};
pub use render::HtmlSurface;
pub use storage::{FileTokenStore, KeyringTokenStore, MemoryTokenStore};
