//! Local persistence for the composed image.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the composed image is written and read back from.
///
/// There is a single target per store; `save` overwrites it without checks.
pub trait ImageStore: Send + Sync {
    /// Path the next `save` will write to. The extension picks the encoding.
    fn target(&self) -> &Path;

    fn save(&self, bytes: &[u8]) -> Result<PathBuf, StorageError>;

    fn load(&self, path: &Path) -> Result<Vec<u8>, StorageError>;
}

/// Writes to one fixed path on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    path: PathBuf,
}

impl LocalImageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageStore for LocalImageStore {
    fn target(&self) -> &Path {
        &self.path
    }

    fn save(&self, bytes: &[u8]) -> Result<PathBuf, StorageError> {
        std::fs::write(&self.path, bytes).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.path.clone())
    }

    fn load(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        std::fs::read(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
