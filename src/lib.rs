pub mod analysis; // Keyword classifier + canned response selection
pub mod api; // HTTP router, handlers, server lifecycle
pub mod config;
pub mod storage; // files/ and sessions/ under one root

use tracing_subscriber::EnvFilter;

use crate::api::ApiContext;
use crate::config::ServerConfig;
use crate::storage::{Storage, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Storage setup failed: {0}")]
    Storage(#[from] StorageError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Install the fmt subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Start the backend with configuration from the environment and serve
/// until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = ServerConfig::from_env();
    tracing::info!(
        addr = %config.bind_addr(),
        data_dir = %config.data_dir.display(),
        base_url = %config.base_url,
        "Configuration loaded"
    );

    let storage = Storage::init(&config.data_dir)?;
    let ctx = ApiContext::new(storage, config.base_url.clone());

    api::serve_forever(config.bind_addr(), ctx).await?;
    Ok(())
}
