//! Audit status values
//!
//! Serialized forms are part of the manifest schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of recomputing digests against the lock document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashStatus {
    Pass,
    Fail,
}

impl HashStatus {
    pub fn from_mismatch_count(count: usize) -> Self {
        if count == 0 {
            HashStatus::Pass
        } else {
            HashStatus::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashStatus::Pass => "pass",
            HashStatus::Fail => "fail",
        }
    }
}

/// Outcome of comparing the primary and mirror lock documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockSyncStatus {
    Synced,
    Drift,
}

impl LockSyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockSyncStatus::Synced => "synced",
            LockSyncStatus::Drift => "drift",
        }
    }
}

/// Final deployment verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    ReadyForRuntime,
    ReadyWithWarnings,
    NotReady,
}

impl Verdict {
    /// Derive the verdict from the three validation results.
    ///
    /// Any missing required file wins over every other result.
    pub fn derive(missing_files: usize, deployment_ready: bool) -> Self {
        if missing_files > 0 {
            Verdict::NotReady
        } else if deployment_ready {
            Verdict::ReadyForRuntime
        } else {
            Verdict::ReadyWithWarnings
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::ReadyForRuntime => "READY_FOR_RUNTIME",
            Verdict::ReadyWithWarnings => "READY_WITH_WARNINGS",
            Verdict::NotReady => "NOT_READY",
        }
    }

    /// Process exit code for this verdict
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::NotReady => 1,
            Verdict::ReadyForRuntime | Verdict::ReadyWithWarnings => 0,
        }
    }
}

/// Severity attached to a missing-file record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Blocking,
}

macro_rules! display_via_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_via_as_str!(HashStatus, LockSyncStatus, Verdict);
