//! Credentials and session token handling

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::errors::{LearnboardError, Result};

/// Username (or email) and password submitted through the login form
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// base64 of `username:password`, without the scheme prefix
    pub fn encoded(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.username, self.password))
    }

    /// Full `Authorization` header value
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", self.encoded())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Strip surrounding quote characters and whitespace.
///
/// Stripping repeats until neither remains at either end, so the function is
/// idempotent.
pub fn clean_token(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\'').to_string()
}

/// Pull a bearer token out of a sign-in response body.
///
/// Accepted shapes: a bare token, a JSON string, or a JSON object carrying
/// `token` or `access_token`. Any other JSON value, or an empty result, is
/// treated as a rejected sign-in.
pub fn extract_token(body: &str) -> Result<String> {
    let raw = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(token)) => token,
        Ok(Value::Object(map)) => ["token", "access_token"]
            .iter()
            .find_map(|key| match map.get(*key) {
                Some(Value::String(token)) if !token.is_empty() => Some(token.clone()),
                _ => None,
            })
            .ok_or(LearnboardError::InvalidCredentials)?,
        Ok(_) => return Err(LearnboardError::InvalidCredentials),
        Err(_) => body.to_string(),
    };

    let token = clean_token(&raw);
    if token.is_empty() {
        return Err(LearnboardError::InvalidCredentials);
    }
    Ok(token)
}
