//! # HTTP Server
//!
//! Assembles the mutation API, health probe, and WebSocket endpoint into
//! one router over shared state.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{ws::WebSocketUpgrade, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

use super::config::ServerConfig;
use super::data_routes::data_routes;
use super::health_routes::health_routes;
use crate::observability::Logger;
use crate::realtime::{session, Hub};
use crate::store::DataLog;

/// State shared across all handlers.
///
/// The log is the only shared mutable resource; its `RwLock` is the
/// critical section that keeps append/clear/persist/broadcast a single
/// totally-ordered sequence.
pub struct AppState {
    pub log: Arc<RwLock<DataLog>>,
    pub hub: Arc<Hub>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(log: DataLog) -> Self {
        Self {
            log: Arc::new(RwLock::new(log)),
            hub: Arc::new(Hub::new()),
            started_at: Instant::now(),
        }
    }
}

/// Build the combined router over the given state
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let cors = if config.cors_origins.is_empty() {
        // No origins configured: permissive for development
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(health_routes(state.clone()))
        .nest("/api", data_routes(state.clone()))
        .route("/ws", get(websocket_handler).with_state(state))
        .layer(cors)
}

/// Upgrade a connection into a subscriber session
async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| session::run(socket, state.log.clone(), state.hub.clone()))
}

/// The assembled server, ready to bind
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over a freshly-loaded (or given) log
    pub fn new(config: ServerConfig, log: DataLog) -> Self {
        let state = Arc::new(AppState::new(log));
        let router = build_router(state, &config);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        Logger::info(
            "server_started",
            &[
                ("addr", &addr.to_string()),
                ("data_path", &self.config.data_path.display().to_string()),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_server_creation() {
        let dir = TempDir::new().unwrap();
        let log = DataLog::load(dir.path().join("data.json"));
        let server = HttpServer::new(ServerConfig::default(), log);
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let dir = TempDir::new().unwrap();
        let log = DataLog::load(dir.path().join("data.json"));
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let server = HttpServer::new(config, log);
        let _router = server.router();
    }
}
