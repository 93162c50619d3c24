//! The append-only data log and its whole-file persistence

use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};

use super::errors::{StoreError, StoreResult};
use super::record::Record;
use crate::observability::Logger;

/// The ordered, append-only record sequence and its backing file.
///
/// All access goes through the single owning instance; callers only ever
/// receive cloned snapshots of the sequence. Persistence overwrites the
/// whole file on every mutation, so a crash mid-write can corrupt it —
/// that is this service's accepted durability bar, and a corrupt file is
/// recovered from by starting empty.
#[derive(Debug)]
pub struct DataLog {
    path: PathBuf,
    records: Vec<Record>,
}

impl DataLog {
    /// Open the log, reading the persisted file if one exists.
    ///
    /// Never fails: an unreadable or corrupt file is logged and the log
    /// starts empty.
    pub fn load(path: PathBuf) -> Self {
        let records = match Self::read_file(&path) {
            Ok(records) => records,
            Err(e) => {
                Logger::error("load_failed", &[("error", &e.to_string())]);
                Vec::new()
            }
        };

        Logger::info(
            "log_loaded",
            &[
                ("path", &path.display().to_string()),
                ("records", &records.len().to_string()),
            ],
        );

        Self { path, records }
    }

    fn read_file(path: &PathBuf) -> StoreResult<Vec<Record>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(path).map_err(|source| StoreError::Load {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })
    }

    /// Append client fields as a new record, assign identity, persist.
    ///
    /// The in-memory append always succeeds; a persist failure is logged
    /// and swallowed (availability over durability).
    pub fn append(&mut self, fields: Map<String, Value>) -> Record {
        let record = Record::new(fields);
        self.records.push(record.clone());

        if let Err(e) = self.persist() {
            Logger::error(
                "persist_failed",
                &[("error", &e.to_string()), ("records", &self.len().to_string())],
            );
        }

        record
    }

    /// Reset the sequence to empty and persist the empty file
    pub fn clear(&mut self) {
        self.records.clear();

        if let Err(e) = self.persist() {
            Logger::error("persist_failed", &[("error", &e.to_string()), ("records", "0")]);
        }
    }

    /// Cloned snapshot of the full sequence, in append order
    pub fn all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Current record count
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rewrite the whole backing file from the in-memory sequence
    fn persist(&self) -> StoreResult<()> {
        let text = serde_json::to_string_pretty(&self.records)?;

        fs::write(&self.path, text).map_err(|source| StoreError::Persist {
            path: self.path.clone(),
            source,
        })
    }
}
