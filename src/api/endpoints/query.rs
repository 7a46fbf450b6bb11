//! Query endpoints.
//!
//! - `POST /process-query` — classify, route by endpoint hint, write artifacts
//! - `POST /simple-query` — canned answer, no classification
//! - `POST /classify-query` — classification only

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::selector::simple_response;
use crate::analysis::templates::SIMPLE_QUERY_CONFIDENCE;
use crate::analysis::{classify_query, select_response, EndpointHint, FileLinks, QueryComplexity};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::storage::SessionRecord;

#[derive(Deserialize)]
pub struct ProcessQueryRequest {
    pub query: String,
    #[serde(default)]
    pub endpoint: EndpointHint,
}

#[derive(Serialize)]
pub struct ProcessQueryResponse {
    pub session_id: String,
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<FileLinks>,
    pub query: String,
}

/// `POST /process-query` — main entry point used by the chat frontend.
///
/// Every call gets a fresh session id. The full analysis path writes the
/// report and summary under `files/<session_id>/`; every path records the
/// outcome in `sessions/<session_id>.json`.
pub async fn process(
    State(ctx): State<ApiContext>,
    Json(req): Json<ProcessQueryRequest>,
) -> Result<Json<ProcessQueryResponse>, ApiError> {
    let session_id = Uuid::new_v4().to_string();
    let outcome = select_response(
        &req.query,
        req.endpoint,
        &ctx.session_files_url(&session_id),
        ctx.chooser.as_ref(),
    );

    if !outcome.artifacts.is_empty() {
        ctx.storage.write_artifacts(&session_id, &outcome.artifacts)?;
    }

    ctx.storage.save_session(&SessionRecord {
        id: session_id.clone(),
        query: req.query.clone(),
        endpoint: req.endpoint,
        classification: outcome.classification.clone(),
        message: outcome.message.clone(),
        files: outcome.files.clone(),
        created_at: Utc::now(),
    })?;

    tracing::info!(
        session_id = %session_id,
        endpoint = ?req.endpoint,
        classification = %outcome.classification.classification,
        artifacts = outcome.artifacts.len(),
        "Query processed"
    );

    Ok(Json(ProcessQueryResponse {
        session_id,
        status: "success",
        message: outcome.message,
        files: outcome.files,
        query: req.query,
    }))
}

#[derive(Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct SimpleQueryResponse {
    pub response: &'static str,
    #[serde(rename = "type")]
    pub kind: QueryComplexity,
    pub confidence: f64,
}

/// `POST /simple-query` — canned answer regardless of the query.
pub async fn simple(
    State(ctx): State<ApiContext>,
    Json(_req): Json<QueryRequest>,
) -> Json<SimpleQueryResponse> {
    Json(SimpleQueryResponse {
        response: simple_response(ctx.chooser.as_ref()),
        kind: QueryComplexity::Simple,
        confidence: SIMPLE_QUERY_CONFIDENCE,
    })
}

#[derive(Serialize)]
pub struct ClassifyQueryResponse {
    pub classification: QueryComplexity,
    pub confidence: f64,
    pub reasoning: String,
}

/// `POST /classify-query` — keyword classification only. Deterministic.
pub async fn classify(Json(req): Json<QueryRequest>) -> Json<ClassifyQueryResponse> {
    let c = classify_query(&req.query);
    Json(ClassifyQueryResponse {
        classification: c.classification,
        confidence: c.confidence,
        reasoning: c.reasoning,
    })
}
