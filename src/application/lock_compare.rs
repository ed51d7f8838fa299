//! Lock synchronization stage
//!
//! Third audit stage: the mirror lock shipped with the worker must be a
//! structural copy of the primary lock.

use std::path::Path;

use crate::domain::ports::{AuditEvent, AuditEventSink, AuditStage};
use crate::domain::services::{compare_locks, LockMetadata};
use crate::domain::value_objects::{AssetPath, LockSyncStatus};
use crate::error::AuditResult;
use crate::infrastructure::LockRepository;

/// Result of the lock comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockSyncReport {
    pub status: LockSyncStatus,
    pub primary: LockMetadata,
    pub mirror: LockMetadata,
}

/// Load both lock documents and compare their canonical forms
pub fn compare_lock_files(
    root: &Path,
    primary: &AssetPath,
    mirror: &AssetPath,
    ignore_fields: &[String],
    sink: &dyn AuditEventSink,
) -> AuditResult<LockSyncReport> {
    sink.on_event(AuditEvent::StageStarted {
        stage: AuditStage::LockSync,
    });

    let repo = LockRepository::new();
    let primary_doc = repo.load_value(&primary.under(root))?;
    let mirror_doc = repo.load_value(&mirror.under(root))?;

    let status = compare_locks(&primary_doc, &mirror_doc, ignore_fields);
    let report = LockSyncReport {
        status,
        primary: LockMetadata::from_value(&primary_doc),
        mirror: LockMetadata::from_value(&mirror_doc),
    };

    if status == LockSyncStatus::Drift {
        tracing::warn!(
            primary = %primary,
            mirror = %mirror,
            primary_version = ?report.primary.version,
            mirror_version = ?report.mirror.version,
            "lock documents drifted"
        );
    }

    sink.on_event(AuditEvent::LockCompared {
        primary: primary.to_string(),
        mirror: mirror.to_string(),
        status,
    });

    Ok(report)
}
