//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, RequiredFiles};
use crate::domain::value_objects::AssetPath;
use crate::error::{AuditError, AuditResult};

use super::loader::{self, ConfigWarning};

/// Audit and bundle naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default = "default_bundle_version")]
    pub bundle_version: String,

    #[serde(default = "default_audit_mode")]
    pub mode: String,

    /// Manifest file name, written at the audit root
    #[serde(default = "default_manifest_name")]
    pub manifest: String,

    /// Bundle file name; derived from `bundle_version` when unset
    #[serde(default)]
    pub bundle: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            bundle_version: default_bundle_version(),
            mode: default_audit_mode(),
            manifest: default_manifest_name(),
            bundle: None,
        }
    }
}

fn default_bundle_version() -> String {
    "1.0.0".to_string()
}

fn default_audit_mode() -> String {
    "FAIL-CLOSED".to_string()
}

fn default_manifest_name() -> String {
    "forensic-audit-manifest.json".to_string()
}

/// Lock document locations and comparison options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocksConfig {
    /// Lock the hash stage verifies against
    #[serde(default = "default_primary_lock")]
    pub primary: String,

    /// Copy that must stay identical to `primary`
    #[serde(default = "default_mirror_lock")]
    pub mirror: String,

    /// Top-level fields excluded from the sync comparison
    #[serde(default)]
    pub ignore_fields: Vec<String>,
}

impl Default for LocksConfig {
    fn default() -> Self {
        Self {
            primary: default_primary_lock(),
            mirror: default_mirror_lock(),
            ignore_fields: Vec::new(),
        }
    }
}

fn default_primary_lock() -> String {
    "versions/prompt-lock.json".to_string()
}

fn default_mirror_lock() -> String {
    "cloudflare-worker/prompt-lock.json".to_string()
}

/// One `[[inventory.category]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
}

/// Required/optional file table overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InventoryConfig {
    /// Replaces the built-in required table when non-empty
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryConfig>,

    /// Replaces the built-in optional list when set
    #[serde(default)]
    pub optional: Option<Vec<String>>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub locks: LocksConfig,

    #[serde(default)]
    pub inventory: InventoryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AuditResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AuditResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve explicit, project, user, then default configuration
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> AuditResult<loader::LoadedConfig> {
        loader::resolve(root, explicit)
    }

    /// Apply environment variable overrides (AUDITPACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Bundle file name
    pub fn bundle_name(&self) -> String {
        self.audit.bundle.clone().unwrap_or_else(|| {
            format!(
                "forensic-deployment-audit-bundle-v{}.zip",
                self.audit.bundle_version
            )
        })
    }

    /// Required-file table: configured categories or the built-in table
    pub fn required_files(&self) -> AuditResult<RequiredFiles> {
        let builtin = RequiredFiles::builtin();

        let categories = if self.inventory.categories.is_empty() {
            builtin.categories().to_vec()
        } else {
            self.inventory
                .categories
                .iter()
                .map(|c| {
                    let files = c
                        .files
                        .iter()
                        .map(|f| config_path(f))
                        .collect::<AuditResult<Vec<_>>>()?;
                    Ok(Category::new(c.name.clone(), files))
                })
                .collect::<AuditResult<Vec<_>>>()?
        };

        let optional = match &self.inventory.optional {
            Some(list) => list
                .iter()
                .map(|f| config_path(f))
                .collect::<AuditResult<Vec<_>>>()?,
            None => builtin.optional().to_vec(),
        };

        Ok(RequiredFiles::new(categories, optional))
    }
}

/// Validate a path coming from configuration
pub(crate) fn config_path(raw: &str) -> AuditResult<AssetPath> {
    AssetPath::new(raw).map_err(|e| AuditError::InvalidConfig {
        file: raw.into(),
        message: format!("invalid path '{}': {}", raw, e),
    })
}
