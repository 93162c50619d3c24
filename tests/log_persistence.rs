//! Log store persistence tests
//!
//! - Append order is the only order: reads always return records in the
//!   order they were appended, with unique ids.
//! - Restarting over a valid persisted file reproduces the sequence.
//! - Restarting over a corrupt file yields an empty log, not a crash.

use std::collections::HashSet;
use std::fs;

use serde_json::{json, Map, Value};
use tempfile::TempDir;

use presslog::store::DataLog;

fn fields(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

#[test]
fn test_append_order_and_unique_ids() {
    let dir = TempDir::new().unwrap();
    let mut log = DataLog::load(dir.path().join("data.json"));

    let appended: Vec<String> = (0..50)
        .map(|i| log.append(fields(json!({"reading": i}))).id)
        .collect();

    let all = log.all();
    assert_eq!(all.len(), 50);
    for (i, record) in all.iter().enumerate() {
        assert_eq!(record.id, appended[i]);
        assert_eq!(record.fields["reading"], json!(i));
    }

    let unique: HashSet<_> = appended.iter().collect();
    assert_eq!(unique.len(), 50);
}

#[test]
fn test_timestamps_non_decreasing() {
    let dir = TempDir::new().unwrap();
    let mut log = DataLog::load(dir.path().join("data.json"));

    log.append(fields(json!({"ph": 7.1})));
    log.append(fields(json!({"ph": 7.3})));

    let all = log.all();
    assert!(all[0].timestamp <= all[1].timestamp);
}

#[test]
fn test_restart_reproduces_sequence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    let before;
    {
        let mut log = DataLog::load(path.clone());
        log.append(fields(json!({"ph": 7.1, "press": "north"})));
        log.append(fields(json!({"ph": 7.3})));
        log.append(fields(json!({"note": "cleaned filter"})));
        before = log.all();
    }

    let log = DataLog::load(path);
    assert_eq!(log.all(), before);
}

#[test]
fn test_clear_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    {
        let mut log = DataLog::load(path.clone());
        log.append(fields(json!({"ph": 7.1})));
        log.clear();
    }

    let log = DataLog::load(path);
    assert!(log.is_empty());
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{this is [not json").unwrap();

    let log = DataLog::load(path.clone());
    assert!(log.is_empty());
}

#[test]
fn test_corrupt_file_recovers_on_next_append() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "[{\"truncated").unwrap();

    let mut log = DataLog::load(path.clone());
    log.append(fields(json!({"ph": 7.0})));

    // The bad file was rewritten; a further restart sees one record
    let reloaded = DataLog::load(path);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_wrong_shape_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    // Valid JSON, but not an array of records
    fs::write(&path, r#"{"records": []}"#).unwrap();

    let log = DataLog::load(path);
    assert!(log.is_empty());
}
