//! Audit manifest entity
//!
//! The aggregate written to `forensic-audit-manifest.json`. It is computed
//! once from the stage results, persisted, and then used as the input to
//! packaging and reporting.
//!
//! Invariant: `deployment_ready` is true iff there are no missing files, the
//! hash status is `pass` and the lock status is `synced`. Construct through
//! [`AuditManifest::assemble`] so the invariant and the verdict are derived
//! rather than set by hand.

use serde::{Deserialize, Serialize};

use super::findings::{HashMismatchRecord, MissingFileRecord};
use super::inventory::{categories, RequiredFiles};
use crate::domain::value_objects::{HashStatus, LockSyncStatus, Verdict};

/// Number of checks contributing to the readiness score
pub const READINESS_CHECKS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditMetadata {
    pub bundle_version: String,
    pub timestamp_utc: String,
    pub repository_version: String,
    pub audit_mode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryCounts {
    pub total_domains: usize,
    pub total_archetypes: usize,
    pub total_prompts: usize,
    pub ci_workflows_count: usize,
    pub gpt_config_count: usize,
    pub total_required_files: usize,
}

impl InventoryCounts {
    /// Derive counts from the declared table
    pub fn from_required(required: &RequiredFiles) -> Self {
        let total_domains = required.count(categories::DOMAIN_ATOMS);
        let total_archetypes = required.count(categories::ARCHETYPES);
        Self {
            total_domains,
            total_archetypes,
            total_prompts: total_domains + total_archetypes,
            ci_workflows_count: required.count(categories::CI_WORKFLOWS),
            gpt_config_count: required.count(categories::OPENAI_CUSTOM_GPTS),
            total_required_files: required.total_required(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResults {
    pub hash_integrity_status: HashStatus,
    pub lock_sync_status: LockSyncStatus,
    pub missing_files_count: usize,
    pub hash_mismatches_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Issues {
    pub missing_files: Vec<MissingFileRecord>,
    pub hash_mismatches: Vec<HashMismatchRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditManifest {
    pub audit_metadata: AuditMetadata,
    pub inventory: InventoryCounts,
    pub validation_results: ValidationResults,
    pub issues: Issues,
    pub deployment_ready: bool,
    pub verdict: Verdict,
}

/// `deployment_ready` formula
pub fn is_deployment_ready(
    missing_files: usize,
    hash_status: HashStatus,
    lock_status: LockSyncStatus,
) -> bool {
    missing_files == 0 && hash_status == HashStatus::Pass && lock_status == LockSyncStatus::Synced
}

impl AuditManifest {
    /// Combine stage results into a manifest, deriving readiness and verdict.
    pub fn assemble(
        audit_metadata: AuditMetadata,
        inventory: InventoryCounts,
        hash_status: HashStatus,
        lock_status: LockSyncStatus,
        missing_files: Vec<MissingFileRecord>,
        hash_mismatches: Vec<HashMismatchRecord>,
    ) -> Self {
        let deployment_ready = is_deployment_ready(missing_files.len(), hash_status, lock_status);
        let verdict = Verdict::derive(missing_files.len(), deployment_ready);

        Self {
            audit_metadata,
            inventory,
            validation_results: ValidationResults {
                hash_integrity_status: hash_status,
                lock_sync_status: lock_status,
                missing_files_count: missing_files.len(),
                hash_mismatches_count: hash_mismatches.len(),
            },
            issues: Issues {
                missing_files,
                hash_mismatches,
            },
            deployment_ready,
            verdict,
        }
    }

    /// How many of the four readiness checks passed
    pub fn checks_passed(&self) -> usize {
        let results = &self.validation_results;
        [
            results.missing_files_count == 0,
            results.hash_integrity_status == HashStatus::Pass,
            results.lock_sync_status == LockSyncStatus::Synced,
            self.deployment_ready,
        ]
        .iter()
        .filter(|passed| **passed)
        .count()
    }

    /// Passed checks scaled to 0..=100
    pub fn readiness_score(&self) -> u8 {
        (self.checks_passed() * 100 / READINESS_CHECKS) as u8
    }

    /// Pretty JSON form persisted to disk
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
