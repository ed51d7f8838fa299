//! Scenario C: A prompt was edited without re-locking
//!
//! Journey: One domain prompt changed after the lock was generated. The
//! audit still packages the tree but downgrades the verdict.
//!
//! Success Criteria:
//! - Exit code 0 with verdict READY_WITH_WARNINGS
//! - The mismatch is recorded with expected and actual digests

use crate::common::*;

const EDITED: &str = "domains/domain-04-marketing.system.prompt.md";

#[test]
fn scenario_single_hash_mismatch_downgrades_verdict() {
    let env = TestEnv::complete();
    let expected = sha256_hex(env.read(EDITED).as_bytes());
    env.write(EDITED, "edited after locking\n");

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 0);
    assert_output_contains!(result, "READY_WITH_WARNINGS");
    assert_output_contains!(result, &format!("HASH MISMATCH: {EDITED}"));
    assert_output_contains!(result, "Readiness Score:      50/100");

    let manifest = read_json(&env.path(MANIFEST));
    assert_eq!(manifest["verdict"], "READY_WITH_WARNINGS");
    assert_eq!(manifest["deployment_ready"], false);
    assert_eq!(manifest["validation_results"]["hash_integrity_status"], "fail");
    assert_eq!(manifest["validation_results"]["hash_mismatches_count"], 1);

    let mismatch = &manifest["issues"]["hash_mismatches"][0];
    assert_eq!(mismatch["file"], EDITED);
    assert_eq!(mismatch["expected"], expected.as_str());
    assert_eq!(
        mismatch["actual"],
        sha256_hex(b"edited after locking\n").as_str()
    );
    assert_eq!(mismatch["type"], "domain");

    assert!(env.path(BUNDLE).exists());
}

#[test]
fn scenario_locked_file_outside_required_table_reports_sentinel() {
    let env = TestEnv::complete();
    let mut lock: serde_json::Value =
        serde_json::from_str(&env.read(PRIMARY_LOCK)).unwrap();
    lock["prompts"]["retired"] = serde_json::json!({
        "file": "domains/retired.system.prompt.md",
        "hash": "00",
        "type": "domain",
    });
    let text = serde_json::to_string_pretty(&lock).unwrap();
    env.write(PRIMARY_LOCK, &text);
    env.write(MIRROR_LOCK, &text);

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 0);

    let manifest = read_json(&env.path(MANIFEST));
    let mismatch = &manifest["issues"]["hash_mismatches"][0];
    assert_eq!(mismatch["file"], "domains/retired.system.prompt.md");
    assert_eq!(mismatch["actual"], "FILE_NOT_FOUND");
}
