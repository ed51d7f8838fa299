//! Scenario B: A required file is missing
//!
//! Journey: Someone deleted README.md. The audit must stop before writing
//! anything and leave earlier outputs alone.
//!
//! Success Criteria:
//! - Exit code 1
//! - No manifest, no bundle
//! - The missing path is reported with its category

use crate::common::*;

#[test]
fn scenario_missing_required_file_aborts_without_outputs() {
    let env = TestEnv::complete();
    env.remove("README.md");

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 1);
    assert_output_contains!(result, "README.md (MISSING)");
    assert_output_contains!(result, "AUDIT ABORTED (FAIL-CLOSED)");
    assert_output_contains!(result, "MISSING: README.md (META)");

    assert!(!env.path(MANIFEST).exists());
    assert!(!env.path(BUNDLE).exists());
}

#[test]
fn scenario_abort_leaves_stale_outputs_untouched() {
    let env = TestEnv::complete();
    env.write(MANIFEST, "{\"stale\": true}\n");
    env.write(BUNDLE, "stale archive");
    env.remove("versions/prompt-manifest.json");

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 1);
    assert_eq!(env.read(MANIFEST), "{\"stale\": true}\n");
    assert_eq!(env.read(BUNDLE), "stale archive");
}

#[test]
fn scenario_missing_lock_file_is_a_missing_required_file() {
    let env = TestEnv::complete();
    env.remove(MIRROR_LOCK);

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 1);
    assert_output_contains!(result, "MISSING: cloudflare-worker/prompt-lock.json (CLOUDFLARE_WORKER)");
}

#[test]
fn scenario_every_missing_file_is_listed() {
    let env = TestEnv::complete();
    env.remove("README.md");
    env.remove("SECURITY.md");
    env.remove(".github/workflows/cloudflare-deploy.yml");

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 1);
    assert_output_contains!(result, "3 required file(s) missing");
    assert_output_contains!(result, "MISSING: SECURITY.md (META)");
    assert_output_contains!(result, "MISSING: .github/workflows/cloudflare-deploy.yml (CI_WORKFLOWS)");
}

#[test]
fn scenario_directory_at_required_path_counts_as_missing() {
    let env = TestEnv::complete();
    env.replace_with_dir("SECURITY.md");

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 1);
    assert_output_contains!(result, "MISSING: SECURITY.md (META)");
    assert!(!env.path(MANIFEST).exists());
    assert!(!env.path(BUNDLE).exists());
}
