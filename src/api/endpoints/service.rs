//! Service banner.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: [&'static str; 3],
}

/// `GET /` — confirms the backend is up and lists the query endpoints.
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: crate::config::APP_NAME,
        status: "running",
        version: crate::config::APP_VERSION,
        endpoints: ["/process-query", "/simple-query", "/classify-query"],
    })
}
