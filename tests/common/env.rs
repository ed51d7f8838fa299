//! Test environment builder for isolated auditpack runs.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures;

/// Result of running the auditpack binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON: {l}\n{e}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated audit root. `XDG_CONFIG_HOME` points at an empty directory so a
/// developer's own config never leaks into a run.
pub struct TestEnv {
    pub root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty audit root
    pub fn empty() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_auditpack")),
        }
    }

    /// Audit root holding every built-in required and optional file, with
    /// both lock documents matching the prompt contents
    pub fn complete() -> Self {
        let env = Self::empty();
        fixtures::write_complete_tree(env.root.path());
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        fixtures::write_file(self.root.path(), relative, content);
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.path(relative)).unwrap();
    }

    /// Swap a file for an empty directory of the same name
    pub fn replace_with_dir(&self, relative: &str) {
        self.remove(relative);
        std::fs::create_dir_all(self.path(relative)).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Run auditpack with `--root` set to this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_raw(self.root.path(), args, env_vars)
    }

    /// Run with an explicit root that may not exist
    pub fn run_raw(&self, root: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.config_home.path())
            .arg("--root")
            .arg(root)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("CI")
            .env_remove("RUST_LOG");
        for key in [
            "AUDITPACK_BUNDLE_VERSION",
            "AUDITPACK_AUDIT_MODE",
            "AUDITPACK_IGNORE_LOCK_FIELDS",
            "AUDITPACK_COLOR",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run auditpack");
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
