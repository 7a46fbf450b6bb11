//! Flat-file storage under a single injected root.
//!
//! Layout:
//! - `files/<session_id>/...` — generated artifacts, served verbatim
//! - `sessions/<session_id>.json` — one record per processed query
//!
//! No locking: concurrent writers to the same session id race.

pub mod artifacts;
pub mod sessions;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use sessions::SessionRecord;

pub const FILES_DIR: &str = "files";
pub const SESSIONS_DIR: &str = "sessions";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),
}

/// Handle to the storage root. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Create `files/` and `sessions/` under `root` if missing.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let storage = Self { root: root.into() };
        std::fs::create_dir_all(storage.files_dir())?;
        std::fs::create_dir_all(storage.sessions_dir())?;
        tracing::info!(root = %storage.root.display(), "Storage initialized");
        Ok(storage)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files_dir(&self) -> PathBuf {
        self.root.join(FILES_DIR)
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join(SESSIONS_DIR)
    }
}

/// Reject ids that would escape their directory once joined.
pub(crate) fn check_session_id(id: &str) -> Result<(), StorageError> {
    let plain = !id.is_empty()
        && !id.starts_with('.')
        && !id.contains('/')
        && !id.contains('\\');
    if plain {
        Ok(())
    } else {
        Err(StorageError::InvalidSessionId(id.to_string()))
    }
}
