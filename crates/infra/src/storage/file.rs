//! Token slot backed by a plain-text file

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use learnboard_core::TokenStore;
use learnboard_domain::{LearnboardError, Result};
use tracing::debug;

use crate::errors::InfraError;

/// Stores the token in `<directory>/<slot_name>`.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(directory: impl AsRef<Path>, slot_name: &str) -> Self {
        Self { path: directory.as_ref().join(slot_name) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn io_error(err: std::io::Error) -> LearnboardError {
    InfraError::from(err).into()
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(None),
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(err)),
        }
    }

    async fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        tokio::fs::write(&self.path, token).await.map_err(io_error)?;
        debug!(path = %self.path.display(), "Stored session token");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Removed session token");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(err)),
        }
    }
}
