//! Scenario A: Complete, consistent asset tree
//!
//! Journey: A release engineer runs the audit before shipping a tree that
//! has every required file and matching lock documents.
//!
//! Success Criteria:
//! - Exit code 0 with verdict READY_FOR_RUNTIME
//! - Manifest written, then the bundle, which contains the manifest first
//! - Every required and optional file archived exactly once

use crate::common::*;

#[test]
fn scenario_complete_tree_is_ready_for_runtime() {
    let env = TestEnv::complete();

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 0);
    assert_output_contains!(result, "READY_FOR_RUNTIME");
    assert_output_contains!(result, "No blocking issues found.");
    assert_output_contains!(result, "Readiness Score:      100/100");

    let manifest = read_json(&env.path(MANIFEST));
    assert_eq!(manifest["verdict"], "READY_FOR_RUNTIME");
    assert_eq!(manifest["deployment_ready"], true);
    assert_eq!(manifest["audit_metadata"]["bundle_version"], "1.0.0");
    assert_eq!(manifest["audit_metadata"]["repository_version"], "2.1.0");
    assert_eq!(manifest["audit_metadata"]["audit_mode"], "FAIL-CLOSED");
    assert_eq!(manifest["inventory"]["total_domains"], 10);
    assert_eq!(manifest["inventory"]["total_archetypes"], 4);
    assert_eq!(manifest["inventory"]["total_prompts"], 14);
    assert_eq!(manifest["inventory"]["ci_workflows_count"], 5);
    assert_eq!(manifest["inventory"]["gpt_config_count"], 15);
    assert_eq!(manifest["inventory"]["total_required_files"], 47);
    assert_eq!(manifest["validation_results"]["hash_integrity_status"], "pass");
    assert_eq!(manifest["validation_results"]["lock_sync_status"], "synced");
    assert_eq!(manifest["issues"]["missing_files"], serde_json::json!([]));
    assert_eq!(manifest["issues"]["hash_mismatches"], serde_json::json!([]));

    let names = zip_entry_names(&env.path(BUNDLE));
    assert_eq!(names.len(), 1 + BUILTIN_REQUIRED + BUILTIN_OPTIONAL);
    assert_eq!(names[0], MANIFEST);
    assert!(names.iter().any(|n| n == "README.md"));
    assert!(names.iter().any(|n| n == "cloudflare-worker/package-lock.json"));
}

#[test]
fn scenario_default_command_is_audit() {
    let env = TestEnv::complete();

    let result = env.run(&[]);
    assert_exit_code!(result, 0);
    assert!(env.path(MANIFEST).exists());
    assert!(env.path(BUNDLE).exists());
}

#[test]
fn scenario_absent_optional_files_are_not_required() {
    let env = TestEnv::complete();
    env.remove("cloudflare-worker/package.json");
    env.remove("cloudflare-worker/package-lock.json");

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 0);

    let names = zip_entry_names(&env.path(BUNDLE));
    assert_eq!(names.len(), 1 + BUILTIN_REQUIRED);
}

#[test]
fn scenario_rerun_replaces_previous_outputs() {
    let env = TestEnv::complete();
    env.write(BUNDLE, "not a zip");

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 0);

    let names = zip_entry_names(&env.path(BUNDLE));
    assert_eq!(names[0], MANIFEST);
    assert!(!names.iter().any(|n| n == BUNDLE));
}

#[test]
fn scenario_directory_at_optional_path_is_skipped_on_rerun() {
    let env = TestEnv::complete();
    assert_exit_code!(env.run(&["audit"]), 0);
    assert_eq!(
        zip_entry_names(&env.path(BUNDLE)).len(),
        1 + BUILTIN_REQUIRED + BUILTIN_OPTIONAL
    );

    env.replace_with_dir("cloudflare-worker/package.json");

    let result = env.run(&["audit"]);
    assert_exit_code!(result, 0);
    let manifest = read_json(&env.path(MANIFEST));
    assert_eq!(manifest["verdict"], "READY_FOR_RUNTIME");
    let names = zip_entry_names(&env.path(BUNDLE));
    assert_eq!(names.len(), BUILTIN_REQUIRED + BUILTIN_OPTIONAL);
    assert!(!names.iter().any(|n| n.starts_with("cloudflare-worker/package.json")));
}
