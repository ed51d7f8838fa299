//! Local File System Implementation
//!
//! All disk access for the audit pipeline goes through `LocalFs`. Every
//! operation opens and releases its handle before returning.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::value_objects::ContentHash;
use crate::error::{AuditError, AuditResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Check that a path names a regular file (symlinks followed).
    ///
    /// "Not found" and non-file entries such as directories yield `Ok(false)`;
    /// any other failure (permission denied on a parent directory, for
    /// instance) is a fatal error.
    pub fn is_file(&self, path: &Path) -> AuditResult<bool> {
        match std::fs::metadata(path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AuditError::io(path, e)),
        }
    }

    /// Check that a path exists and is a directory
    pub fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Read a whole file as UTF-8 text
    pub fn read_to_string(&self, path: &Path) -> AuditResult<String> {
        std::fs::read_to_string(path).map_err(|e| AuditError::io(path, e))
    }

    /// SHA-256 of a file, streamed in fixed-size chunks
    pub fn hash_file(&self, path: &Path) -> AuditResult<ContentHash> {
        let file = File::open(path).map_err(|e| AuditError::io(path, e))?;
        ContentHash::from_reader(file).map_err(|e| AuditError::io(path, e))
    }

    /// Write content atomically (temp file in the same directory, then rename)
    pub fn write_atomic(&self, path: &Path, content: &[u8]) -> AuditResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| AuditError::io(parent, e))?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| AuditError::io(parent, e))?;
        tmp.write_all(content).map_err(|e| AuditError::io(path, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| AuditError::io(path, e))?;
        tmp.persist(path).map_err(|e| AuditError::io(path, e.error))?;
        Ok(())
    }

    /// Remove a file if present. Returns whether something was removed.
    pub fn remove_if_exists(&self, path: &Path) -> AuditResult<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AuditError::io(path, e)),
        }
    }

    /// Size of a file in bytes
    pub fn file_size(&self, path: &Path) -> AuditResult<u64> {
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| AuditError::io(path, e))
    }
}
