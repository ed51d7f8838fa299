//! Fixture tree matching the built-in required-file table.

use std::path::Path;

use auditpack::RequiredFiles;
use sha2::{Digest, Sha256};

pub const PRIMARY_LOCK: &str = "versions/prompt-lock.json";
pub const MIRROR_LOCK: &str = "cloudflare-worker/prompt-lock.json";
pub const MANIFEST: &str = "forensic-audit-manifest.json";
pub const BUNDLE: &str = "forensic-deployment-audit-bundle-v1.0.0.zip";

pub const BUILTIN_REQUIRED: usize = 47;
pub const BUILTIN_OPTIONAL: usize = 2;

pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Content written for a non-lock fixture file
pub fn fixture_content(relative: &str) -> String {
    format!("# {relative}\n\nfixture content\n")
}

/// Files the lock documents pin: the ten domain and four archetype prompts
pub fn locked_prompts() -> Vec<(String, String, &'static str)> {
    RequiredFiles::builtin()
        .entries()
        .filter_map(|entry| {
            let path = entry.path.as_str();
            let asset_type = match entry.category {
                "DOMAIN_ATOMS" => "domain",
                "ARCHETYPES" => "archetype",
                _ => return None,
            };
            let id = path
                .rsplit('/')
                .next()
                .unwrap_or(path)
                .trim_end_matches(".system.prompt.md")
                .to_string();
            Some((id, path.to_string(), asset_type))
        })
        .collect()
}

/// Lock document pinning the current content of every prompt under `root`
pub fn lock_json(root: &Path, generated: &str) -> String {
    let mut prompts = serde_json::Map::new();
    for (id, file, asset_type) in locked_prompts() {
        let bytes = std::fs::read(root.join(&file)).unwrap();
        prompts.insert(
            id,
            serde_json::json!({
                "file": file,
                "hash": sha256_hex(&bytes),
                "type": asset_type,
            }),
        );
    }
    let doc = serde_json::json!({
        "version": "2.1.0",
        "generated": generated,
        "algorithm": "sha256",
        "prompts": prompts,
    });
    serde_json::to_string_pretty(&doc).unwrap()
}

pub fn write_complete_tree(root: &Path) {
    let table = RequiredFiles::builtin();
    for entry in table.entries() {
        let path = entry.path.as_str();
        if path == PRIMARY_LOCK || path == MIRROR_LOCK {
            continue;
        }
        write_file(root, path, &fixture_content(path));
    }
    for optional in table.optional() {
        write_file(root, optional.as_str(), "{}\n");
    }

    let lock = lock_json(root, "2026-01-01T00:00:00Z");
    write_file(root, PRIMARY_LOCK, &lock);
    write_file(root, MIRROR_LOCK, &lock);
}
