//! Wire messages for the real-time channel
//!
//! Every frame is a JSON object tagged with a `type` field.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Message from a subscriber to the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Liveness check; answered with `pong`
    Ping,

    /// On-demand full resynchronization; answered with `allData`
    RequestData,
}

/// Event pushed from the server to subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Sent once, immediately after a session registers
    #[serde(rename_all = "camelCase")]
    Connected { total_records: usize },

    /// A record was appended to the log
    #[serde(rename_all = "camelCase")]
    DataAdded { record: Record, total_records: usize },

    /// The log was cleared
    DataCleared,

    /// Full snapshot, in response to `requestData`
    AllData { data: Vec<Record> },

    /// Response to `ping`
    Pong,
}
