//! Configuration loader
//!
//! Loads application configuration from a file and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from the built-in defaults
//! 2. Overlay a config file: `LEARNBOARD_CONFIG` if set, otherwise the first
//!    file found by [`probe_config_paths`]
//! 3. Overlay `LEARNBOARD_*` environment variables
//! 4. Validate the result
//!
//! ## Environment Variables
//! - `LEARNBOARD_CONFIG`: Explicit config file path
//! - `LEARNBOARD_AUTH_URL`: Sign-in endpoint
//! - `LEARNBOARD_GRAPHQL_URL`: GraphQL endpoint
//! - `LEARNBOARD_EVENT_ID`: Event the profile query is scoped to
//! - `LEARNBOARD_TIMEOUT_SECS`: HTTP timeout in seconds
//! - `LEARNBOARD_BIND_ADDR`: Local web server address
//! - `LEARNBOARD_TOKEN_BACKEND`: `file`, `keyring` or `memory`
//! - `LEARNBOARD_TOKEN_SLOT`: Name of the token slot
//! - `LEARNBOARD_TOKEN_DIR`: Directory for the file backend
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./learnboard.toml`, `./learnboard.json`, `./config.toml`,
//!    `./config.json` (current working directory)
//! 2. The same names next to the executable

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use learnboard_domain::{Config, LearnboardError, Result, StorageConfig, TokenBackend};
use url::Url;

const CONFIG_PATH_VAR: &str = "LEARNBOARD_CONFIG";
const CONFIG_FILE_NAMES: [&str; 4] =
    ["learnboard.toml", "learnboard.json", "config.toml", "config.json"];

/// Load, overlay and validate the configuration.
///
/// A missing config file is not an error; defaults apply.
///
/// # Errors
/// Returns `LearnboardError::Config` if:
/// - `LEARNBOARD_CONFIG` names a file that does not exist
/// - A file or variable has an invalid value
/// - The merged configuration fails validation
pub fn load() -> Result<Config> {
    let explicit = std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from);
    let base = match explicit.or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_overrides(base, |key| std::env::var(key).ok())?;
    validate(&config)?;
    tracing::info!(
        auth_url = %config.platform.auth_url,
        graphql_url = %config.platform.graphql_url,
        event_id = config.platform.event_id,
        backend = %config.storage.backend,
        "Configuration loaded"
    );
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected
/// by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `LearnboardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LearnboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LearnboardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LearnboardError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format chosen by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LearnboardError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LearnboardError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(LearnboardError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// First existing config file in the working directory or next to the
/// executable.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Overlay `LEARNBOARD_*` values returned by `lookup` onto `config`.
///
/// # Errors
/// Returns `LearnboardError::Config` for unparsable numbers or backends.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("LEARNBOARD_AUTH_URL") {
        config.platform.auth_url = url;
    }
    if let Some(url) = lookup("LEARNBOARD_GRAPHQL_URL") {
        config.platform.graphql_url = url;
    }
    if let Some(raw) = lookup("LEARNBOARD_EVENT_ID") {
        config.platform.event_id = raw
            .trim()
            .parse()
            .map_err(|e| LearnboardError::Config(format!("Invalid event id: {}", e)))?;
    }
    if let Some(raw) = lookup("LEARNBOARD_TIMEOUT_SECS") {
        config.platform.timeout_secs = raw
            .trim()
            .parse()
            .map_err(|e| LearnboardError::Config(format!("Invalid timeout: {}", e)))?;
    }
    if let Some(addr) = lookup("LEARNBOARD_BIND_ADDR") {
        config.server.bind_addr = addr;
    }
    if let Some(raw) = lookup("LEARNBOARD_TOKEN_BACKEND") {
        config.storage.backend = raw.parse::<TokenBackend>().map_err(|_| {
            LearnboardError::Config(format!("Unknown token backend: {}", raw.trim()))
        })?;
    }
    if let Some(slot) = lookup("LEARNBOARD_TOKEN_SLOT") {
        config.storage.slot_name = slot;
    }
    if let Some(dir) = lookup("LEARNBOARD_TOKEN_DIR") {
        config.storage.directory = Some(dir);
    }
    Ok(config)
}

/// Check URLs, timeout, bind address and slot name.
///
/// # Errors
/// Returns `LearnboardError::Config` describing the first invalid field.
pub fn validate(config: &Config) -> Result<()> {
    for (name, value) in
        [("auth_url", &config.platform.auth_url), ("graphql_url", &config.platform.graphql_url)]
    {
        let url = Url::parse(value)
            .map_err(|e| LearnboardError::Config(format!("Invalid {name} '{value}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LearnboardError::Config(format!("{name} must be an http(s) URL")));
        }
    }

    if config.platform.timeout_secs == 0 {
        return Err(LearnboardError::Config("timeout_secs must be greater than zero".into()));
    }

    config.server.bind_addr.parse::<SocketAddr>().map_err(|e| {
        LearnboardError::Config(format!("Invalid bind address '{}': {e}", config.server.bind_addr))
    })?;

    let slot = config.storage.slot_name.trim();
    if slot.is_empty() || slot.contains(['/', '\\']) {
        return Err(LearnboardError::Config(format!("Invalid token slot name '{slot}'")));
    }

    Ok(())
}

/// Directory the file token store writes into.
///
/// Uses the configured directory, else `$XDG_DATA_HOME/learnboard`, else
/// `$HOME/.local/share/learnboard`, else `./.learnboard`.
pub fn resolve_token_directory(storage: &StorageConfig) -> PathBuf {
    if let Some(dir) = storage.directory.as_deref().filter(|dir| !dir.trim().is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(data_home) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(data_home).join("learnboard");
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local").join("share").join("learnboard");
    }
    PathBuf::from(".learnboard")
}
