//! # Broadcast Hub
//!
//! The observer registry: holds every open session's outbound channel
//! and fans mutation events out to all of them.

use std::collections::HashMap;
use std::sync::RwLock;

use tokio::sync::mpsc;
use uuid::Uuid;

use super::event::ServerEvent;
use crate::observability::Logger;

/// Opaque handle identifying a registered session
pub type SessionId = Uuid;

/// Receiving end of a session's outbound event stream
pub type EventReceiver = mpsc::UnboundedReceiver<String>;

/// Registry of open subscriber sessions.
///
/// Delivery is fire-and-forget: a session whose channel is closed is
/// dropped from the set, never surfaced as an error to the caller.
/// Callers serialize their `broadcast` calls (mutations happen under the
/// log's write lock), so every session observes events in mutation order.
#[derive(Debug, Default)]
pub struct Hub {
    sessions: RwLock<HashMap<SessionId, mpsc::UnboundedSender<String>>>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session and immediately queue its `connected`
    /// event carrying the current record count.
    pub fn register(&self, total_records: usize) -> (SessionId, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();

        let connected = ServerEvent::Connected { total_records };
        if let Ok(text) = serde_json::to_string(&connected) {
            let _ = tx.send(text);
        }

        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(id, tx);
        }

        Logger::info("session_registered", &[("session", &id.to_string())]);
        (id, rx)
    }

    /// Remove a session. Idempotent: unregistering twice is a no-op.
    pub fn unregister(&self, id: SessionId) {
        if let Ok(mut sessions) = self.sessions.write() {
            if sessions.remove(&id).is_some() {
                Logger::info("session_unregistered", &[("session", &id.to_string())]);
            }
        }
    }

    /// Send an event to every registered session.
    ///
    /// The event is serialized once; sessions that fail to accept
    /// delivery are dropped from the set.
    pub fn broadcast(&self, event: &ServerEvent) {
        let text = match serde_json::to_string(event) {
            Ok(text) => text,
            Err(e) => {
                Logger::error("broadcast_encode_failed", &[("error", &e.to_string())]);
                return;
            }
        };

        if let Ok(mut sessions) = self.sessions.write() {
            sessions.retain(|id, tx| {
                let open = tx.send(text.clone()).is_ok();
                if !open {
                    Logger::warn("session_dropped", &[("session", &id.to_string())]);
                }
                open
            });
        }
    }

    /// Number of currently-registered sessions
    pub fn session_count(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }
}
