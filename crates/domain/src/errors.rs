//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{LOGIN_FAILED_MESSAGE, PROFILE_LOAD_FAILED_MESSAGE};

/// Main error type for Learnboard
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LearnboardError {
    /// The auth endpoint rejected the credentials (or answered with something
    /// that is not a token). The cause is deliberately not carried.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Transport error: {0}")]
    Transport(String),

    /// The GraphQL endpoint reported an error in its `errors` list.
    #[error("Query error: {0}")]
    Query(String),

    /// The response did not contain exactly one user row.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LearnboardError {
    /// True for the three kinds a profile fetch can fail with. All of them end
    /// the session.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Query(_) | Self::DataIntegrity(_))
    }

    /// Fixed message shown to the user. Never includes backend detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => LOGIN_FAILED_MESSAGE,
            Self::Transport(_) | Self::Query(_) | Self::DataIntegrity(_) => {
                PROFILE_LOAD_FAILED_MESSAGE
            }
            Self::Config(_) | Self::Storage(_) | Self::Internal(_) => {
                "Something went wrong. Please try again."
            }
        }
    }
}

/// Result type alias for Learnboard operations
pub type Result<T> = std::result::Result<T, LearnboardError>;
