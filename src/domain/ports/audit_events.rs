//! Audit Event Port
//!
//! Provides an observable interface for the audit pipeline.
//! Every finding is reported here as soon as it is detected, before it is
//! folded into the manifest.

use std::path::PathBuf;

use crate::domain::value_objects::{HashStatus, LockSyncStatus, Verdict};

/// Pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStage {
    Inventory,
    HashVerify,
    LockSync,
    Manifest,
    Bundle,
}

impl AuditStage {
    pub fn title(&self) -> &'static str {
        match self {
            AuditStage::Inventory => "Required file inventory",
            AuditStage::HashVerify => "Hash re-calculation",
            AuditStage::LockSync => "Lock sync validation",
            AuditStage::Manifest => "Audit manifest",
            AuditStage::Bundle => "Audit bundle",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStage::Inventory => "inventory",
            AuditStage::HashVerify => "hash_verify",
            AuditStage::LockSync => "lock_sync",
            AuditStage::Manifest => "manifest",
            AuditStage::Bundle => "bundle",
        }
    }
}

/// Result of checking one locked file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashCheck {
    Match,
    Mismatch,
    Missing,
}

/// Event emitted during an audit
#[derive(Debug, Clone)]
pub enum AuditEvent {
    /// A stage began
    StageStarted { stage: AuditStage },

    /// Inventory reached a new category
    CategoryStarted { name: String, file_count: usize },

    /// A required file was checked
    RequiredChecked {
        path: String,
        category: String,
        present: bool,
    },

    /// An optional file was checked
    OptionalChecked { path: String, present: bool },

    /// A lock document was loaded for hashing
    LockLoaded {
        path: String,
        version: Option<String>,
        algorithm: Option<String>,
        entries: usize,
    },

    /// A locked file was hashed (or found missing)
    HashChecked {
        id: String,
        file: String,
        result: HashCheck,
    },

    /// Hash stage finished
    HashSummary {
        status: HashStatus,
        passed: usize,
        failed: usize,
    },

    /// Primary and mirror lock documents were compared
    LockCompared {
        primary: String,
        mirror: String,
        status: LockSyncStatus,
    },

    /// Manifest persisted
    ManifestWritten {
        path: PathBuf,
        deployment_ready: bool,
        verdict: Verdict,
    },

    /// Archive entry written
    BundleEntryAdded { name: String },

    /// Archive finalized
    BundleCreated {
        path: PathBuf,
        entries: usize,
        size_bytes: u64,
    },

    /// Fail-closed gate tripped; nothing after inventory will run
    Aborted { missing_count: usize },
}

/// Trait for receiving audit events
///
/// Implementations:
/// - `ConsoleAuditSink`: Sectioned progress in the terminal
/// - `JsonAuditSink`: NDJSON event stream for CI
/// - `NoopAuditSink`: Silent operation
pub trait AuditEventSink {
    /// Handle an audit event
    fn on_event(&self, event: AuditEvent);
}

/// No-op event sink for silent operation
pub struct NoopAuditSink;

impl AuditEventSink for NoopAuditSink {
    fn on_event(&self, _event: AuditEvent) {}
}
