//! JSON Lock Repository
//!
//! Reads lock documents from disk. A missing or malformed lock document is a
//! fatal error: it means the tree cannot be audited at all.

use std::path::Path;

use serde_json::Value;

use crate::domain::entities::LockDocument;
use crate::error::{AuditError, AuditResult};
use crate::infrastructure::fs::LocalFs;

/// JSON-based lock document repository
#[derive(Debug, Clone, Copy, Default)]
pub struct LockRepository {
    fs: LocalFs,
}

impl LockRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }

    /// Load the raw JSON value (used for structural comparison)
    pub fn load_value(&self, path: &Path) -> AuditResult<Value> {
        let content = self.fs.read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| AuditError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load and validate a typed lock document
    pub fn load(&self, path: &Path) -> AuditResult<LockDocument> {
        let value = self.load_value(path)?;
        if !value.is_object() {
            return Err(AuditError::InvalidLock {
                path: path.to_path_buf(),
                message: "top level must be a JSON object".to_string(),
            });
        }
        LockDocument::from_value(value).map_err(|e| AuditError::InvalidLock {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
