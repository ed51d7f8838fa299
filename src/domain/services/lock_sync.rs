//! Lock synchronization check
//!
//! Two lock documents are "synced" when their canonical forms are equal.
//! The canonical form is the compact JSON serialization with object keys
//! sorted at every depth, so key order in the source files never matters.
//! This is structural equality only: there is no semantic diff.

use serde_json::{Map, Value};

use crate::domain::entities::scalar_text;
use crate::domain::value_objects::LockSyncStatus;

/// Diagnostic metadata pulled from a lock document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockMetadata {
    pub version: Option<String>,
    pub generated: Option<String>,
}

impl LockMetadata {
    pub fn from_value(doc: &Value) -> Self {
        Self {
            version: doc.get("version").and_then(scalar_text),
            generated: doc.get("generated").and_then(scalar_text),
        }
    }
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&map[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Key-sorted serialization with the given top-level fields removed
pub fn canonical_form(doc: &Value, ignore_fields: &[String]) -> String {
    let mut doc = sort_keys(doc);
    if let Value::Object(map) = &mut doc {
        for field in ignore_fields {
            map.remove(field.as_str());
        }
    }
    doc.to_string()
}

/// Compare two lock documents structurally
pub fn compare_locks(primary: &Value, mirror: &Value, ignore_fields: &[String]) -> LockSyncStatus {
    if canonical_form(primary, ignore_fields) == canonical_form(mirror, ignore_fields) {
        LockSyncStatus::Synced
    } else {
        LockSyncStatus::Drift
    }
}
