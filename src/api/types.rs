//! Shared state for the HTTP layer.

use std::sync::Arc;

use crate::analysis::{Chooser, RandomChooser};
use crate::storage::Storage;

/// Shared context for all routes.
///
/// Holds the injected storage root, the public URL prefix for file
/// links and the randomness source used to pick canned answers.
#[derive(Clone)]
pub struct ApiContext {
    pub storage: Storage,
    pub base_url: String,
    pub chooser: Arc<dyn Chooser>,
}

impl ApiContext {
    pub fn new(storage: Storage, base_url: impl Into<String>) -> Self {
        Self::with_chooser(storage, base_url, Arc::new(RandomChooser))
    }

    pub fn with_chooser(
        storage: Storage,
        base_url: impl Into<String>,
        chooser: Arc<dyn Chooser>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            storage,
            base_url,
            chooser,
        }
    }

    /// URL prefix for one session's generated files.
    pub fn session_files_url(&self, session_id: &str) -> String {
        format!("{}/{}/{session_id}", self.base_url, crate::storage::FILES_DIR)
    }
}
