//! Error types for auditpack
//!
//! Only unexpected failures live here. Missing files, hash mismatches and
//! lock drift are audit findings and are recorded in the manifest instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for audit operations
pub type AuditResult<T> = Result<T, AuditError>;

/// Fatal error raised while running an audit
#[derive(Error, Debug)]
pub enum AuditError {
    /// I/O failure other than "not found" on an audited path
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lock document or manifest is not valid JSON
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Lock document parsed but does not follow the lock schema
    #[error("invalid lock document {}: {message}", .path.display())]
    InvalidLock { path: PathBuf, message: String },

    /// Lock entry points outside of the audit root
    #[error("path '{}' escapes audit root '{}'", .path.display(), .root.display())]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Zip archive could not be written
    #[error("failed to write bundle {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Audit root does not exist or is not a directory
    #[error("audit root not found: {}", .path.display())]
    RootNotFound { path: PathBuf },
}

impl AuditError {
    /// Stable machine-readable code for JSON output
    pub fn code(&self) -> &'static str {
        match self {
            AuditError::Io { .. } => "IO",
            AuditError::Json { .. } => "INVALID_JSON",
            AuditError::InvalidLock { .. } => "INVALID_LOCK",
            AuditError::PathEscape { .. } => "PATH_ESCAPE",
            AuditError::Archive { .. } => "ARCHIVE",
            AuditError::InvalidConfig { .. } => "INVALID_CONFIG",
            AuditError::RootNotFound { .. } => "ROOT_NOT_FOUND",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuditError::Io {
            path: path.into(),
            source,
        }
    }
}
