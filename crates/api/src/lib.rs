//! # Learnboard App
//!
//! Application layer - HTTP routes and main entry point.
//!
//! This crate contains:
//! - Route handlers (browser → backend bridge)
//! - Application context (dependency injection)
//! - Logging bootstrap
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Serves the dashboard to a local browser

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::router;
pub use context::AppContext;
