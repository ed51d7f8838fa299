//! Manifest stage
//!
//! Fourth audit stage: fold the stage results into an [`AuditManifest`] and
//! persist it atomically. Packaging only starts once the write succeeded.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use super::hash_verify::HashReport;
use super::lock_compare::LockSyncReport;
use super::plan::AuditPlan;
use crate::domain::entities::{AuditManifest, AuditMetadata, InventoryCounts, MissingFileRecord};
use crate::domain::ports::{AuditEvent, AuditEventSink, AuditStage};
use crate::error::{AuditError, AuditResult};
use crate::infrastructure::LocalFs;

/// Repository version recorded when the primary lock has none
pub const DEFAULT_REPOSITORY_VERSION: &str = "1.0.0";

/// ISO-8601 UTC timestamp with microseconds and an explicit offset
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Assemble the manifest from stage results
pub fn build_manifest(
    plan: &AuditPlan,
    missing: Vec<MissingFileRecord>,
    hashes: &HashReport,
    locks: &LockSyncReport,
    now: DateTime<Utc>,
) -> AuditManifest {
    let metadata = AuditMetadata {
        bundle_version: plan.bundle_version.clone(),
        timestamp_utc: format_timestamp(now),
        repository_version: hashes
            .lock_version
            .clone()
            .unwrap_or_else(|| DEFAULT_REPOSITORY_VERSION.to_string()),
        audit_mode: plan.audit_mode.clone(),
    };

    AuditManifest::assemble(
        metadata,
        InventoryCounts::from_required(&plan.required),
        hashes.status,
        locks.status,
        missing,
        hashes.mismatches.clone(),
    )
}

/// Persist `manifest` at `<root>/<plan.manifest_name>`
pub fn write_manifest(
    root: &Path,
    plan: &AuditPlan,
    manifest: &AuditManifest,
    sink: &dyn AuditEventSink,
) -> AuditResult<PathBuf> {
    sink.on_event(AuditEvent::StageStarted {
        stage: AuditStage::Manifest,
    });

    let path = plan.manifest_name.under(root);
    let mut json = manifest.to_json_pretty().map_err(|source| AuditError::Json {
        path: path.clone(),
        source,
    })?;
    json.push('\n');
    LocalFs::new().write_atomic(&path, json.as_bytes())?;

    tracing::info!(path = %path.display(), verdict = %manifest.verdict, "manifest written");
    sink.on_event(AuditEvent::ManifestWritten {
        path: path.clone(),
        deployment_ready: manifest.deployment_ready,
        verdict: manifest.verdict,
    });

    Ok(path)
}
