//! Hash verification
//!
//! Second audit stage: recompute the SHA-256 of every file pinned in the
//! primary lock document and compare it with the recorded digest.

use std::path::Path;

use crate::domain::entities::{HashMismatchRecord, LockDocument, FILE_NOT_FOUND};
use crate::domain::ports::{AuditEvent, AuditEventSink, AuditStage, HashCheck};
use crate::domain::value_objects::{AssetPath, HashStatus, PathError};
use crate::error::{AuditError, AuditResult};
use crate::infrastructure::{LocalFs, LockRepository};

/// Result of the hash stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashReport {
    pub status: HashStatus,
    pub mismatches: Vec<HashMismatchRecord>,
    pub passed: usize,
    pub failed: usize,
    /// `version` field of the lock that was verified
    pub lock_version: Option<String>,
}

/// Load the lock at `lock_path` (relative to `root`) and verify every entry
pub fn verify_hashes(
    root: &Path,
    lock_path: &AssetPath,
    sink: &dyn AuditEventSink,
) -> AuditResult<HashReport> {
    sink.on_event(AuditEvent::StageStarted {
        stage: AuditStage::HashVerify,
    });

    let document = LockRepository::new().load(&lock_path.under(root))?;
    sink.on_event(AuditEvent::LockLoaded {
        path: lock_path.to_string(),
        version: document.version.clone(),
        algorithm: document.algorithm().map(String::from),
        entries: document.len(),
    });

    verify_document(root, lock_path, &document, sink)
}

/// Verify an already-loaded lock document.
///
/// Entries are visited in ascending id order. A file that does not exist is
/// recorded as a mismatch with `actual = FILE_NOT_FOUND`.
pub fn verify_document(
    root: &Path,
    lock_path: &AssetPath,
    document: &LockDocument,
    sink: &dyn AuditEventSink,
) -> AuditResult<HashReport> {
    let fs = LocalFs::new();
    let mut mismatches = Vec::new();
    let mut passed = 0;

    if document.is_empty() {
        tracing::warn!(lock = %lock_path, "lock document pins no files");
    }

    for (id, entry) in document.entries() {
        let path = entry_path(root, lock_path, id, &entry.file)?;
        let full = path.under(root);

        let result = if fs.is_file(&full)? {
            let actual = fs.hash_file(&full)?;
            tracing::debug!(id, file = %path, digest = %actual, "hashed");
            if actual.matches_str(&entry.hash) {
                passed += 1;
                HashCheck::Match
            } else {
                mismatches.push(HashMismatchRecord {
                    file: entry.file.clone(),
                    expected: entry.hash.clone(),
                    actual: actual.to_string(),
                    asset_type: entry.asset_type.clone(),
                });
                HashCheck::Mismatch
            }
        } else {
            mismatches.push(HashMismatchRecord {
                file: entry.file.clone(),
                expected: entry.hash.clone(),
                actual: FILE_NOT_FOUND.to_string(),
                asset_type: entry.asset_type.clone(),
            });
            HashCheck::Missing
        };

        sink.on_event(AuditEvent::HashChecked {
            id: id.to_string(),
            file: entry.file.clone(),
            result,
        });
    }

    let status = HashStatus::from_mismatch_count(mismatches.len());
    let failed = mismatches.len();
    sink.on_event(AuditEvent::HashSummary {
        status,
        passed,
        failed,
    });
    tracing::info!(%status, passed, failed, "hash verification complete");

    Ok(HashReport {
        status,
        mismatches,
        passed,
        failed,
        lock_version: document.version.clone(),
    })
}

fn entry_path(root: &Path, lock_path: &AssetPath, id: &str, file: &str) -> AuditResult<AssetPath> {
    AssetPath::new(file).map_err(|e| match e {
        PathError::Empty => AuditError::InvalidLock {
            path: lock_path.under(root),
            message: format!("entry '{}' has an empty file path", id),
        },
        PathError::ContainsTraversal | PathError::AbsoluteNotAllowed => AuditError::PathEscape {
            path: file.into(),
            root: root.to_path_buf(),
        },
    })
}
