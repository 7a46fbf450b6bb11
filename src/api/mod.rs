//! HTTP surface of the mock backend.
//!
//! The router is composable: `api_router()` returns a `Router` that can be
//! mounted on any axum server, and `server` wraps it with bind/serve.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{serve_forever, start_server_on, ApiServer};
pub use types::ApiContext;
