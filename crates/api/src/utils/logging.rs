//! Logging bootstrap and structured log helpers

use std::time::Duration;

use learnboard_domain::LearnboardError;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "learnboard=info";

/// Set to `json` for one JSON object per line
pub const LOG_FORMAT_VAR: &str = "LEARNBOARD_LOG_FORMAT";

/// Install the global subscriber. Call once, before anything logs.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let json =
        std::env::var(LOG_FORMAT_VAR).is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

/// Log the outcome of a route handler with structured fields.
///
/// Callers must avoid forwarding credentials or tokens in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `LearnboardError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &LearnboardError) -> &'static str {
    match error {
        LearnboardError::InvalidCredentials => "invalid_credentials",
        LearnboardError::Transport(_) => "transport",
        LearnboardError::Query(_) => "query",
        LearnboardError::DataIntegrity(_) => "data_integrity",
        LearnboardError::Config(_) => "config",
        LearnboardError::Storage(_) => "storage",
        LearnboardError::Internal(_) => "internal",
    }
}

/// Log a failed startup stage with its error label and hand the error back.
pub fn log_startup_failure(stage: &'static str, err: LearnboardError) -> LearnboardError {
    error!(stage, kind = error_label(&err), error = %err, "Startup failed");
    err
}
