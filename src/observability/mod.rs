//! Observability subsystem for presslog
//!
//! Structured one-line JSON logs, written synchronously. There is no
//! metrics pipeline in this service; the `/health` endpoint covers
//! liveness diagnostics.

mod logger;

pub use logger::{Logger, Severity};
