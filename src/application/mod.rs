//! Application Layer
//!
//! Audit stages and the pipeline that sequences them. Stages depend on the
//! domain for rules and on infrastructure for disk access, and report
//! progress through an [`AuditEventSink`](crate::domain::ports::AuditEventSink).
//!
//! ## Stages
//!
//! - `check_inventory` - Required/optional file presence
//! - `verify_hashes` - SHA-256 re-verification against the primary lock
//! - `compare_lock_files` - Primary/mirror lock structural equality
//! - `build_manifest` / `write_manifest` - Manifest assembly and persistence
//! - `create_bundle` - Zip packaging
//!
//! `AuditPipeline` runs them in order behind the fail-closed gate.

pub mod audit;
pub mod bundle;
pub mod hash_verify;
pub mod inventory;
pub mod lock_compare;
pub mod manifest;
pub mod plan;

#[cfg(test)]
pub(crate) mod testing;

pub use audit::{AuditOutcome, AuditPipeline, AuditRun};
pub use bundle::{create_bundle, BundleSummary};
pub use hash_verify::{verify_document, verify_hashes, HashReport};
pub use inventory::{check_inventory, InventoryReport};
pub use lock_compare::{compare_lock_files, LockSyncReport};
pub use manifest::{build_manifest, format_timestamp, write_manifest, DEFAULT_REPOSITORY_VERSION};
pub use plan::AuditPlan;
