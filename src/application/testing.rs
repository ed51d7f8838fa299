//! Sandbox audit trees for unit tests

use std::path::Path;

use tempfile::TempDir;

use crate::application::AuditPlan;
use crate::config::{CategoryConfig, Config};
use crate::domain::value_objects::ContentHash;

pub(crate) const ALPHA: &str = "alpha prompt\n";
pub(crate) const BETA: &str = "beta prompt\n";

pub(crate) fn sha256_hex(content: &str) -> String {
    ContentHash::from_bytes(content.as_bytes()).to_string()
}

/// A small, fully consistent audit root with a matching plan
pub(crate) struct Fixture {
    dir: TempDir,
    pub plan: AuditPlan,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();

        let mut config = Config::default();
        config.inventory.categories = vec![
            category("DOMAIN_ATOMS", &["prompts/a.md"]),
            category("ARCHETYPES", &["prompts/b.md"]),
            category("GOVERNANCE_CORE", &["versions/prompt-lock.json"]),
            category("CLOUDFLARE_WORKER", &["cloudflare-worker/prompt-lock.json"]),
        ];
        config.inventory.optional = Some(vec!["cloudflare-worker/package.json".to_string()]);
        let plan = AuditPlan::from_config(&config).unwrap();

        let fx = Self { dir, plan };
        fx.write("prompts/a.md", ALPHA);
        fx.write("prompts/b.md", BETA);
        fx.write_locks(&fx.lock_json_with(&sha256_hex(ALPHA), &sha256_hex(BETA)));
        fx
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn remove(&self, rel: &str) {
        std::fs::remove_file(self.root().join(rel)).unwrap();
    }

    /// Write the same document to both lock locations
    pub fn write_locks(&self, json: &str) {
        self.write(self.plan.primary_lock.as_str(), json);
        self.write(self.plan.mirror_lock.as_str(), json);
    }

    pub fn lock_json_with(&self, alpha_hash: &str, beta_hash: &str) -> String {
        format!(
            r#"{{
  "version": "2.1.0",
  "generated": "2026-01-01T00:00:00Z",
  "algorithm": "sha256",
  "prompts": {{
    "beta": {{"file": "prompts/b.md", "hash": "{beta_hash}", "type": "archetype"}},
    "alpha": {{"file": "prompts/a.md", "hash": "{alpha_hash}", "type": "domain"}}
  }}
}}"#
        )
    }
}

fn category(name: &str, files: &[&str]) -> CategoryConfig {
    CategoryConfig {
        name: name.to_string(),
        files: files.iter().map(|f| f.to_string()).collect(),
    }
}
