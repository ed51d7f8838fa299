//! Domain Entities
//!
//! - `RequiredFiles` - The declared inventory table
//! - `LockDocument` - Expected hashes for tracked assets
//! - `MissingFileRecord` / `HashMismatchRecord` - Audit findings
//! - `AuditManifest` - The aggregated audit result

mod findings;
pub mod inventory;
mod lock_document;
mod manifest;

pub use findings::{HashMismatchRecord, MissingFileRecord, FILE_NOT_FOUND};
pub use inventory::{Category, RequiredFileEntry, RequiredFiles};
pub(crate) use lock_document::scalar_text;
pub use lock_document::{LockDocument, LockEntry};
pub use manifest::{
    is_deployment_ready, AuditManifest, AuditMetadata, InventoryCounts, Issues,
    ValidationResults, READINESS_CHECKS,
};
