//! Lock document entity - pins expected content hashes for tracked assets
//!
//! Pure data structure; reading it from disk is handled by
//! `infrastructure::repositories::LockRepository`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One tracked asset in a lock document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockEntry {
    /// Path relative to the audit root
    pub file: String,
    /// Expected SHA-256 hex digest
    pub hash: String,
    /// Asset type label (e.g. "domain", "archetype")
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Fields this tool does not interpret (version, owner, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A parsed lock document
///
/// `prompts` is keyed by logical asset id; a `BTreeMap` keeps iteration in
/// ascending id order regardless of the order in the source file.
///
/// `version` and `generated` are diagnostic only: any scalar is accepted and
/// kept as text (`2` becomes `"2"`), and `null` reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockDocument {
    #[serde(default, deserialize_with = "scalar_field")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "scalar_field")]
    pub generated: Option<String>,
    pub prompts: BTreeMap<String, LockEntry>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Text form of a metadata value; `None` for `null`
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn scalar_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

impl LockDocument {
    /// Lift an already-parsed JSON value into a lock document
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Entries in ascending id order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &LockEntry)> {
        self.prompts.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Declared hash algorithm, if the document records one
    pub fn algorithm(&self) -> Option<&str> {
        self.extra.get("algorithm").and_then(Value::as_str)
    }
}
