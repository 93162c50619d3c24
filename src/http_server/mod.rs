//! # HTTP Server Module
//!
//! The mutation API, health probe, and WebSocket upgrade endpoint,
//! combined into a single Axum server.
//!
//! # Endpoints
//!
//! - `GET /api/data` - full log snapshot
//! - `POST /api/data` - append a record (broadcasts `dataAdded`)
//! - `DELETE /api/data` - clear the log (broadcasts `dataCleared`)
//! - `GET /health` - liveness diagnostics
//! - `GET /ws` - real-time subscriber channel

pub mod config;
pub mod data_routes;
pub mod health_routes;
pub mod server;

pub use config::ServerConfig;
pub use server::{AppState, HttpServer};
