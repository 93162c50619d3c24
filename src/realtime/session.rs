//! # Subscriber Session
//!
//! Per-connection protocol handler. A session is created when a
//! WebSocket finishes its upgrade, registers with the hub while open,
//! and unregisters on disconnect or transport error. Reconnection is not
//! the session's concern: a reconnecting client is simply a new session.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::RwLock;

use super::event::{ClientMessage, ServerEvent};
use super::hub::Hub;
use crate::observability::Logger;
use crate::store::DataLog;

/// Drive one subscriber session to completion.
///
/// Runs until the client disconnects or the transport errors; either way
/// the session is unregistered from the hub before returning.
pub async fn run(socket: WebSocket, log: Arc<RwLock<DataLog>>, hub: Arc<Hub>) {
    let (mut sender, mut receiver) = socket.split();

    // Register under the log read lock so the connected count cannot
    // race with an in-flight mutation's broadcast.
    let (session_id, mut events) = {
        let log = log.read().await;
        hub.register(log.len())
    };

    loop {
        tokio::select! {
            // Broadcast events queued by the hub, already serialized
            event = events.recv() => {
                match event {
                    Some(text) => {
                        if sender.send(Message::Text(text)).await.is_err() {
                            break;
                        }
                    }
                    // Hub dropped us (failed delivery on a broadcast)
                    None => break,
                }
            }

            // Inbound control messages
            frame = receiver.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<ClientMessage>(&text) {
                            Ok(msg) => {
                                let reply = respond(msg, &log).await;
                                match serde_json::to_string(&reply) {
                                    Ok(json) => {
                                        if sender.send(Message::Text(json)).await.is_err() {
                                            break;
                                        }
                                    }
                                    Err(e) => {
                                        Logger::error(
                                            "reply_encode_failed",
                                            &[("error", &e.to_string())],
                                        );
                                    }
                                }
                            }
                            // Permissive protocol: log and keep the session open
                            Err(e) => {
                                Logger::warn(
                                    "unknown_client_message",
                                    &[
                                        ("error", &e.to_string()),
                                        ("session", &session_id.to_string()),
                                    ],
                                );
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if sender.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        Logger::warn(
                            "session_transport_error",
                            &[("error", &e.to_string()), ("session", &session_id.to_string())],
                        );
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    hub.unregister(session_id);
}

/// Compute the reply for one inbound control message
pub async fn respond(msg: ClientMessage, log: &RwLock<DataLog>) -> ServerEvent {
    match msg {
        ClientMessage::Ping => ServerEvent::Pong,
        ClientMessage::RequestData => ServerEvent::AllData {
            data: log.read().await.all(),
        },
    }
}
