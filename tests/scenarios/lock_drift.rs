//! Scenario D: The mirror lock lags behind the primary
//!
//! Journey: The lock was regenerated but only the primary copy was
//! committed, so the two differ in their `generated` timestamp.
//!
//! Success Criteria:
//! - Exit code 0 with verdict READY_WITH_WARNINGS and lock status drift
//! - Ignoring the timestamp field restores READY_FOR_RUNTIME

use crate::common::*;

fn regenerate_primary(env: &TestEnv) {
    let lock = lock_json(env.root.path(), "2026-02-02T00:00:00Z");
    env.write(PRIMARY_LOCK, &lock);
}

#[test]
fn scenario_timestamp_only_drift_downgrades_verdict() {
    let env = TestEnv::complete();
    regenerate_primary(&env);

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 0);
    assert_output_contains!(result, "(DRIFT)");

    let manifest = read_json(&env.path(MANIFEST));
    assert_eq!(manifest["verdict"], "READY_WITH_WARNINGS");
    assert_eq!(manifest["validation_results"]["lock_sync_status"], "drift");
    assert_eq!(manifest["validation_results"]["hash_integrity_status"], "pass");
}

#[test]
fn scenario_ignored_timestamp_field_is_synced() {
    let env = TestEnv::complete();
    regenerate_primary(&env);

    let result = env.run(&["--ignore-lock-field", "generated", "audit"]);
    assert_exit_code!(result, 0);

    let manifest = read_json(&env.path(MANIFEST));
    assert_eq!(manifest["verdict"], "READY_FOR_RUNTIME");
    assert_eq!(manifest["validation_results"]["lock_sync_status"], "synced");
}

#[test]
fn scenario_reordered_mirror_keys_are_synced() {
    let env = TestEnv::complete();
    let primary: serde_json::Value = serde_json::from_str(&env.read(PRIMARY_LOCK)).unwrap();
    // Compact rewrite of the same document
    let mut reordered = serde_json::Map::new();
    for key in ["prompts", "algorithm", "generated", "version"] {
        reordered.insert(key.to_string(), primary[key].clone());
    }
    env.write(
        MIRROR_LOCK,
        &serde_json::to_string(&serde_json::Value::Object(reordered)).unwrap(),
    );

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 0);
    assert_output_contains!(result, "READY_FOR_RUNTIME");
}
