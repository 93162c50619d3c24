//! presslog - a real-time append-only data log service
//!
//! An HTTP API mutates the log; WebSocket subscribers observe every
//! mutation as it happens, in mutation order.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod realtime;
pub mod store;
