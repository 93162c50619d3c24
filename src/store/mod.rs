//! # Durable Log Store
//!
//! Owns the authoritative in-memory record sequence and its persistence.
//!
//! The sequence is append-only apart from a whole-log clear. Persistence
//! rewrites a single JSON file on every mutation and loads it back at
//! process start; the in-memory sequence is the source of truth while
//! the process runs.

mod errors;
mod log;
mod record;

pub use errors::{StoreError, StoreResult};
pub use log::DataLog;
pub use record::Record;
