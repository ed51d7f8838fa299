//! Typed NDJSON envelopes emitted by the commands themselves.
//!
//! Per-stage events come from `JsonAuditSink`; these cover the start and end
//! of a command and fatal errors.

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub root: String,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, root: impl Into<String>) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            root: root.into(),
        }
    }
}

/// Event emitted when a command finishes (with or without findings).
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub exit_code: i32,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> CompleteEvent<'a, T> {
    pub fn new(command: &'a str, exit_code: i32, data: T) -> Self {
        Self {
            event: "complete",
            command,
            success: exit_code == 0,
            exit_code,
            data,
        }
    }
}

/// Event emitted when a fatal error stops a command.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}
