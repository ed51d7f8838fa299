//! Configuration module for auditpack
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AUDITPACK_*)
//! 3. Explicit `--config` file, else project config (`<root>/auditpack.toml`)
//! 4. User config (~/.config/auditpack/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub(crate) use types::config_path;
pub use types::{
    AuditConfig, CategoryConfig, ColorMode, Config, InventoryConfig, LocksConfig, OutputConfig,
};
