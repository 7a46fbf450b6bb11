//! HTTP router.
//!
//! Layers (outermost → innermost): Trace → CORS → routes.
//! CORS mirrors any origin, method and header and allows credentials.
//! That is only acceptable for local frontend development.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the full router, including static serving of `files/`.
pub fn api_router(ctx: ApiContext) -> Router {
    let files = ServeDir::new(ctx.storage.files_dir());

    Router::new()
        .route("/", get(endpoints::service::banner))
        .route("/process-query", post(endpoints::query::process))
        .route("/simple-query", post(endpoints::query::simple))
        .route("/classify-query", post(endpoints::query::classify))
        .route("/sessions", get(endpoints::sessions::list))
        .route(
            "/session/:id",
            get(endpoints::sessions::detail).delete(endpoints::sessions::delete),
        )
        .nest_service("/files", files)
        .with_state(ctx)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
