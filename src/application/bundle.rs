//! Bundle packaging
//!
//! Final audit stage: zip the persisted manifest together with every
//! declared file that exists. Entry order is manifest, required files in
//! table order, then optional files. A previous archive is removed first,
//! and a failed stage leaves no archive at the bundle path.

use std::path::{Path, PathBuf};

use super::plan::AuditPlan;
use crate::domain::ports::{AuditEvent, AuditEventSink, AuditStage};
use crate::error::AuditResult;
use crate::infrastructure::{LocalFs, ZipBundleWriter};

/// Archive produced by the bundle stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub path: PathBuf,
    pub entries: usize,
    pub size_bytes: u64,
}

/// Build `<root>/<plan.bundle_name>`, replacing any previous archive
pub fn create_bundle(
    root: &Path,
    plan: &AuditPlan,
    manifest_path: &Path,
    sink: &dyn AuditEventSink,
) -> AuditResult<BundleSummary> {
    sink.on_event(AuditEvent::StageStarted {
        stage: AuditStage::Bundle,
    });

    let fs = LocalFs::new();
    let path = plan.bundle_name.under(root);
    if fs.remove_if_exists(&path)? {
        tracing::debug!(path = %path.display(), "removed previous bundle");
    }

    let mut writer = ZipBundleWriter::create(&path)?;
    let mut add = |source: &Path, name: &str| -> AuditResult<()> {
        if writer.add_file(source, name)? {
            sink.on_event(AuditEvent::BundleEntryAdded {
                name: name.to_string(),
            });
        }
        Ok(())
    };

    add(manifest_path, plan.manifest_name.as_str())?;

    let declared = plan
        .required
        .entries()
        .map(|entry| entry.path)
        .chain(plan.required.optional());
    for file in declared {
        let source = file.under(root);
        if fs.is_file(&source)? {
            add(&source, file.as_str())?;
        }
    }

    let entries = writer.finish()?;
    let size_bytes = fs.file_size(&path)?;

    tracing::info!(path = %path.display(), entries, size_bytes, "bundle created");
    sink.on_event(AuditEvent::BundleCreated {
        path: path.clone(),
        entries,
        size_bytes,
    });

    Ok(BundleSummary {
        path,
        entries,
        size_bytes,
    })
}
