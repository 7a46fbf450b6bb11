//! Session record endpoints.
//!
//! - `GET /sessions` — list recorded session ids
//! - `GET /session/:id` — stored record
//! - `DELETE /session/:id` — remove the record (generated files stay)

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::storage::sessions::SessionSummary;

#[derive(Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionSummary>,
}

/// `GET /sessions`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<SessionListResponse>, ApiError> {
    let sessions = ctx.storage.list_sessions()?;
    Ok(Json(SessionListResponse { sessions }))
}

/// `GET /session/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(session_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let record = ctx.storage.load_session(&session_id).map_err(|e| {
        tracing::debug!(session_id, error = %e, "Session lookup failed");
        ApiError::from(e)
    })?;
    Ok(Json(record))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// `DELETE /session/:id`
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(session_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    ctx.storage.delete_session(&session_id)?;
    Ok(Json(DeleteResponse {
        message: "Session deleted",
    }))
}
