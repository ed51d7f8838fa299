//! auditpack - fail-closed integrity audit for prompt asset trees
//!
//! auditpack checks that every declared asset of a prompt repository is
//! present, re-verifies the SHA-256 digests pinned in its lock document,
//! confirms the worker's mirror lock matches, then records the result in a
//! JSON manifest and packages everything into a zip bundle. A missing
//! required file stops the run before anything is written.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{AuditOutcome, AuditPipeline, AuditPlan, AuditRun};
pub use config::Config;
pub use domain::entities::{AuditManifest, HashMismatchRecord, MissingFileRecord, RequiredFiles};
pub use domain::ports::{AuditEvent, AuditEventSink, AuditStage, NoopAuditSink};
pub use domain::value_objects::{HashStatus, LockSyncStatus, Verdict};
pub use error::{AuditError, AuditResult};
