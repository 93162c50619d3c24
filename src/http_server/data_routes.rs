//! Mutation API routes
//!
//! Translates HTTP verbs into log store operations and fans out the
//! corresponding broadcast events.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::server::AppState;
use crate::realtime::ServerEvent;
use crate::store::Record;

#[derive(Debug, Serialize)]
pub struct AppendResponse {
    pub success: bool,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

fn malformed_input(detail: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: detail, code: 400 }),
    )
}

/// Create the mutation API routes
pub fn data_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/data",
            get(list_handler).post(append_handler).delete(clear_handler),
        )
        .with_state(state)
}

/// Full snapshot of the log, in append order
async fn list_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Record>> {
    Json(state.log.read().await.all())
}

/// Append one record.
///
/// The append, its persist, and the `dataAdded` broadcast all happen
/// under the log write lock, so subscribers observe mutations in exactly
/// the order they committed.
async fn append_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AppendResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(value) = body.map_err(|e| malformed_input(e.body_text()))?;

    let Some(fields) = value.as_object() else {
        return Err(malformed_input("Request body must be a JSON object".to_string()));
    };

    let mut log = state.log.write().await;
    let record = log.append(fields.clone());
    state.hub.broadcast(&ServerEvent::DataAdded {
        record: record.clone(),
        total_records: log.len(),
    });
    drop(log);

    Ok(Json(AppendResponse { success: true, id: record.id }))
}

/// Clear the whole log
async fn clear_handler(State(state): State<Arc<AppState>>) -> Json<ClearResponse> {
    let mut log = state.log.write().await;
    log.clear();
    state.hub.broadcast(&ServerEvent::DataCleared);
    drop(log);

    Json(ClearResponse { success: true })
}
