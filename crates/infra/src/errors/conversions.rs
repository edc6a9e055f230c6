//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use learnboard_domain::LearnboardError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LearnboardError);

impl From<InfraError> for LearnboardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LearnboardError> for InfraError {
    fn from(value: LearnboardError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoLearnboardError {
    fn into_learnboard(self) -> LearnboardError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → LearnboardError */
/* -------------------------------------------------------------------------- */

impl IntoLearnboardError for KeyringError {
    fn into_learnboard(self) -> LearnboardError {
        use KeyringError::*;

        let description = self.to_string();

        match self {
            NoEntry => LearnboardError::Storage("keychain entry not found".into()),
            BadEncoding(_) => {
                LearnboardError::Storage("token in keychain is not valid UTF-8".into())
            }
            PlatformFailure(err) => {
                LearnboardError::Storage(format!("keychain platform error: {err}"))
            }
            NoStorageAccess(err) => {
                LearnboardError::Storage(format!("unable to access secure storage: {err}"))
            }
            _ => LearnboardError::Storage(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_learnboard())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LearnboardError */
/* -------------------------------------------------------------------------- */

impl IntoLearnboardError for HttpError {
    fn into_learnboard(self) -> LearnboardError {
        if self.is_timeout() {
            return LearnboardError::Transport("HTTP request timed out".into());
        }

        if self.is_connect() {
            return LearnboardError::Transport("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return LearnboardError::Transport(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        if self.is_decode() {
            return LearnboardError::Transport(format!("failed to decode HTTP body: {self}"));
        }

        if self.is_builder() {
            return LearnboardError::Internal(format!("invalid HTTP request: {self}"));
        }

        LearnboardError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_learnboard())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → LearnboardError */
/* -------------------------------------------------------------------------- */

impl IntoLearnboardError for std::io::Error {
    fn into_learnboard(self) -> LearnboardError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => LearnboardError::Storage(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                LearnboardError::Storage(format!("permission denied: {self}"))
            }
            _ => LearnboardError::Storage(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_learnboard())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
