//! Audit pipeline
//!
//! `Inventory -> HashVerify -> LockSync -> Manifest -> Bundle`, fail-closed:
//! if any required file is missing the run stops right after the inventory
//! stage, before the manifest or the bundle is touched.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::bundle::{create_bundle, BundleSummary};
use super::hash_verify::{verify_hashes, HashReport};
use super::inventory::{check_inventory, InventoryReport};
use super::lock_compare::{compare_lock_files, LockSyncReport};
use super::manifest::{build_manifest, write_manifest};
use super::plan::AuditPlan;
use crate::domain::entities::{AuditManifest, MissingFileRecord};
use crate::domain::ports::{AuditEvent, AuditEventSink};
use crate::error::{AuditError, AuditResult};
use crate::infrastructure::LocalFs;

/// Everything produced by a run that passed the gate
#[derive(Debug, Clone)]
pub struct AuditRun {
    pub inventory: InventoryReport,
    pub hashes: HashReport,
    pub locks: LockSyncReport,
    pub manifest: AuditManifest,
    pub manifest_path: PathBuf,
    pub bundle: BundleSummary,
}

/// How an audit ended
#[derive(Debug, Clone)]
pub enum AuditOutcome {
    /// Required files were missing; nothing was written
    Aborted { missing: Vec<MissingFileRecord> },
    /// All stages ran
    Completed(Box<AuditRun>),
}

impl AuditOutcome {
    /// Process exit code: 1 on abort or `NOT_READY`, else 0
    pub fn exit_code(&self) -> i32 {
        match self {
            AuditOutcome::Aborted { .. } => 1,
            AuditOutcome::Completed(run) => run.manifest.verdict.exit_code(),
        }
    }
}

/// Runs the audit stages against one root
pub struct AuditPipeline {
    root: PathBuf,
    plan: AuditPlan,
    now: Option<DateTime<Utc>>,
}

impl AuditPipeline {
    pub fn new(root: impl Into<PathBuf>, plan: AuditPlan) -> Self {
        Self {
            root: root.into(),
            plan,
            now: None,
        }
    }

    /// Fix the manifest timestamp instead of reading the clock
    pub fn with_timestamp(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn plan(&self) -> &AuditPlan {
        &self.plan
    }

    fn ensure_root(&self) -> AuditResult<()> {
        if LocalFs::new().is_dir(&self.root) {
            Ok(())
        } else {
            Err(AuditError::RootNotFound {
                path: self.root.clone(),
            })
        }
    }

    /// Inventory stage only
    pub fn inventory(&self, sink: &dyn AuditEventSink) -> AuditResult<InventoryReport> {
        self.ensure_root()?;
        check_inventory(&self.root, &self.plan.required, sink)
    }

    /// Hash stage only
    pub fn verify(&self, sink: &dyn AuditEventSink) -> AuditResult<HashReport> {
        self.ensure_root()?;
        verify_hashes(&self.root, &self.plan.primary_lock, sink)
    }

    /// Lock comparison only
    pub fn lock_sync(&self, sink: &dyn AuditEventSink) -> AuditResult<LockSyncReport> {
        self.ensure_root()?;
        compare_lock_files(
            &self.root,
            &self.plan.primary_lock,
            &self.plan.mirror_lock,
            &self.plan.ignore_lock_fields,
            sink,
        )
    }

    /// Full pipeline
    pub fn run(&self, sink: &dyn AuditEventSink) -> AuditResult<AuditOutcome> {
        let _span = tracing::info_span!("audit", root = %self.root.display()).entered();

        let inventory = self.inventory(sink)?;
        if !inventory.all_present() {
            tracing::warn!(
                missing = inventory.missing.len(),
                "required files missing, aborting before manifest"
            );
            sink.on_event(AuditEvent::Aborted {
                missing_count: inventory.missing.len(),
            });
            return Ok(AuditOutcome::Aborted {
                missing: inventory.missing,
            });
        }

        let hashes = verify_hashes(&self.root, &self.plan.primary_lock, sink)?;
        let locks = compare_lock_files(
            &self.root,
            &self.plan.primary_lock,
            &self.plan.mirror_lock,
            &self.plan.ignore_lock_fields,
            sink,
        )?;

        let now = self.now.unwrap_or_else(Utc::now);
        let manifest = build_manifest(
            &self.plan,
            inventory.missing.clone(),
            &hashes,
            &locks,
            now,
        );
        let manifest_path = write_manifest(&self.root, &self.plan, &manifest, sink)?;
        let bundle = create_bundle(&self.root, &self.plan, &manifest_path, sink)?;

        Ok(AuditOutcome::Completed(Box::new(AuditRun {
            inventory,
            hashes,
            locks,
            manifest,
            manifest_path,
            bundle,
        })))
    }
}
