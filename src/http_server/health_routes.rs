//! Health probe route
//!
//! Liveness diagnostics, not part of the core contract.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Seconds since process start
    pub uptime: u64,
    /// Currently-open subscriber sessions
    pub connections: usize,
    /// Current record count
    pub records: usize,
}

/// Create the health route
pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new().route("/health", get(health_handler)).with_state(state)
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs(),
        connections: state.hub.session_count(),
        records: state.log.read().await.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime: 12,
            connections: 2,
            records: 40,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"connections\":2"));
    }
}
