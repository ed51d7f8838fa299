//! Property tests for the readiness and verdict formulas.

use proptest::prelude::*;

use auditpack::domain::entities::{
    is_deployment_ready, AuditManifest, AuditMetadata, InventoryCounts,
};
use auditpack::{HashMismatchRecord, HashStatus, LockSyncStatus, MissingFileRecord, RequiredFiles, Verdict};

fn metadata() -> AuditMetadata {
    AuditMetadata {
        bundle_version: "1.0.0".into(),
        timestamp_utc: "2026-01-01T00:00:00.000000+00:00".into(),
        repository_version: "1.0.0".into(),
        audit_mode: "FAIL-CLOSED".into(),
    }
}

fn lock_status() -> impl Strategy<Value = LockSyncStatus> {
    prop_oneof![Just(LockSyncStatus::Synced), Just(LockSyncStatus::Drift)]
}

proptest! {
    /// PROPERTY: deployment_ready iff no missing files, hash pass and synced.
    #[test]
    fn property_deployment_ready_formula(
        missing in 0usize..4,
        mismatches in 0usize..4,
        lock in lock_status(),
    ) {
        let hash = HashStatus::from_mismatch_count(mismatches);
        let expected = missing == 0 && mismatches == 0 && lock == LockSyncStatus::Synced;
        prop_assert_eq!(is_deployment_ready(missing, hash, lock), expected);
    }

    /// PROPERTY: Missing files always win; otherwise readiness picks the verdict.
    #[test]
    fn property_verdict_formula(missing in 0usize..4, ready in any::<bool>()) {
        let verdict = Verdict::derive(missing, ready);
        let expected = if missing > 0 {
            Verdict::NotReady
        } else if ready {
            Verdict::ReadyForRuntime
        } else {
            Verdict::ReadyWithWarnings
        };
        prop_assert_eq!(verdict, expected);
        prop_assert_eq!(verdict.exit_code(), if missing > 0 { 1 } else { 0 });
    }

    /// PROPERTY: An assembled manifest is internally consistent.
    #[test]
    fn property_assembled_manifest_consistent(
        missing in 0usize..3,
        mismatches in 0usize..3,
        lock in lock_status(),
    ) {
        let missing_files: Vec<MissingFileRecord> = (0..missing)
            .map(|i| MissingFileRecord::blocking(format!("m{i}.md"), "META"))
            .collect();
        let hash_mismatches: Vec<HashMismatchRecord> = (0..mismatches)
            .map(|i| HashMismatchRecord {
                file: format!("h{i}.md"),
                expected: "00".into(),
                actual: "11".into(),
                asset_type: "domain".into(),
            })
            .collect();

        let manifest = AuditManifest::assemble(
            metadata(),
            InventoryCounts::from_required(&RequiredFiles::builtin()),
            HashStatus::from_mismatch_count(mismatches),
            lock,
            missing_files,
            hash_mismatches,
        );

        let results = &manifest.validation_results;
        prop_assert_eq!(results.missing_files_count, manifest.issues.missing_files.len());
        prop_assert_eq!(results.hash_mismatches_count, manifest.issues.hash_mismatches.len());
        prop_assert_eq!(
            results.hash_integrity_status == HashStatus::Pass,
            manifest.issues.hash_mismatches.is_empty()
        );
        prop_assert_eq!(
            manifest.deployment_ready,
            is_deployment_ready(missing, results.hash_integrity_status, lock)
        );
        prop_assert_eq!(manifest.verdict, Verdict::derive(missing, manifest.deployment_ready));
        prop_assert!(manifest.readiness_score() <= 100);
        prop_assert_eq!(manifest.readiness_score() == 100, manifest.deployment_ready);
    }
}
