//! Audit findings recorded during verification
//!
//! Created while a stage runs and read-only afterwards. Both records are
//! serialized verbatim into the manifest `issues` section.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Severity;

/// Sentinel recorded as the actual hash when a locked file is absent
pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";

/// A declared required file that does not exist under the audit root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFileRecord {
    pub path: String,
    pub category: String,
    #[serde(default)]
    pub severity: Severity,
}

impl MissingFileRecord {
    pub fn blocking(path: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            category: category.into(),
            severity: Severity::Blocking,
        }
    }
}

/// A locked file whose digest disagrees with its lock entry, or is missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashMismatchRecord {
    pub file: String,
    pub expected: String,
    pub actual: String,
    #[serde(rename = "type")]
    pub asset_type: String,
}

impl HashMismatchRecord {
    /// True when the record stands for an absent file rather than a bad digest
    pub fn is_missing_file(&self) -> bool {
        self.actual == FILE_NOT_FOUND
    }
}
