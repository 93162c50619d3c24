//! # Real-Time Broadcast Module
//!
//! Pushes every log mutation to connected WebSocket subscribers.
//!
//! - **Hub**: the observer registry; one `broadcast` entry point fans an
//!   event out to every open session.
//! - **Session**: per-connection protocol handler (ping/pong, full-sync
//!   requests, delivery of broadcast events).
//! - **Events**: the JSON-tagged wire messages in both directions.

mod event;
mod hub;
pub mod session;

pub use event::{ClientMessage, ServerEvent};
pub use hub::{Hub, SessionId};
