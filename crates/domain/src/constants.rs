//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Remote platform defaults
pub const DEFAULT_AUTH_URL: &str = "https://learn.zone01kisumu.ke/api/auth/signin";
pub const DEFAULT_GRAPHQL_URL: &str =
    "https://learn.zone01kisumu.ke/api/graphql-engine/v1/graphql";
pub const DEFAULT_EVENT_ID: i64 = 75;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Local server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

// Token persistence
pub const DEFAULT_TOKEN_SLOT: &str = "zone01_token";
pub const KEYRING_SERVICE_NAME: &str = "com.learnboard.app";

// User-facing messages. These never carry backend detail.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username/email or password. Please try again.";
pub const PROFILE_LOAD_FAILED_MESSAGE: &str = "Failed to load your profile. Please sign in again.";

// Display fallbacks
pub const CAMPUS_FALLBACK: &str = "N/A";
pub const SKILL_TYPE_PREFIX: &str = "skill_";
