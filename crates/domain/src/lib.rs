//! # Learnboard Domain
//!
//! Business domain types and models for Learnboard.
//!
//! This crate contains:
//! - The normalized profile record and its chart inputs
//! - Credentials and session token unwrapping
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Learnboard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
