//! Audit plan
//!
//! Resolved, validated inputs shared by every stage: the required-file table,
//! lock locations and output names. Built from [`Config`] so path checks
//! happen once before any stage touches the filesystem.

use crate::config::{config_path, Config};
use crate::domain::entities::RequiredFiles;
use crate::domain::value_objects::AssetPath;
use crate::error::AuditResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditPlan {
    pub required: RequiredFiles,
    pub primary_lock: AssetPath,
    pub mirror_lock: AssetPath,
    pub ignore_lock_fields: Vec<String>,
    pub manifest_name: AssetPath,
    pub bundle_name: AssetPath,
    pub bundle_version: String,
    pub audit_mode: String,
}

impl AuditPlan {
    pub fn from_config(config: &Config) -> AuditResult<Self> {
        Ok(Self {
            required: config.required_files()?,
            primary_lock: config_path(&config.locks.primary)?,
            mirror_lock: config_path(&config.locks.mirror)?,
            ignore_lock_fields: config.locks.ignore_fields.clone(),
            manifest_name: config_path(&config.audit.manifest)?,
            bundle_name: config_path(&config.bundle_name())?,
            bundle_version: config.audit.bundle_version.clone(),
            audit_mode: config.audit.mode.clone(),
        })
    }

    /// Add fields to ignore during lock comparison, skipping duplicates
    pub fn with_ignored_lock_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for field in fields {
            let field = field.into();
            if !self.ignore_lock_fields.contains(&field) {
                self.ignore_lock_fields.push(field);
            }
        }
        self
    }
}
