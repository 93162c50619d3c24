//! Log records
//!
//! A record is an opaque client-supplied JSON object augmented with two
//! server-assigned fields: `_id` and `_timestamp`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// One unit of appended data plus server-assigned identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Server-assigned identifier, unique in-process (UUID v4)
    #[serde(rename = "_id")]
    pub id: String,

    /// Server clock at append time, ISO-8601
    #[serde(rename = "_timestamp")]
    pub timestamp: DateTime<Utc>,

    /// Client-supplied fields, flattened onto the record object
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Create a record from client fields, assigning `_id` and `_timestamp`.
    ///
    /// Server-assigned keys are stripped from the incoming fields so a
    /// client body cannot collide with them.
    pub fn new(mut fields: Map<String, Value>) -> Self {
        fields.remove("_id");
        fields.remove("_timestamp");

        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_record_assigns_unique_ids() {
        let a = Record::new(fields(json!({"ph": 7.1})));
        let b = Record::new(fields(json!({"ph": 7.1})));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = Record::new(fields(json!({"ph": 7.1, "press": "north"})));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["ph"], json!(7.1));
        assert_eq!(value["press"], "north");
        assert!(value["_id"].is_string());
        assert!(value["_timestamp"].is_string());
    }

    #[test]
    fn test_server_fields_not_spoofable() {
        let record = Record::new(fields(json!({"_id": "fake", "_timestamp": "then", "v": 1})));

        assert_ne!(record.id, "fake");
        let value = serde_json::to_value(&record).unwrap();
        assert_ne!(value["_id"], "fake");
        assert_ne!(value["_timestamp"], "then");
        assert_eq!(value["v"], 1);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = Record::new(fields(json!({"ph": 7.3})));
        let text = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
    }
}
