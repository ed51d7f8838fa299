//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.

pub mod audit_events;

pub use audit_events::{AuditEvent, AuditEventSink, AuditStage, HashCheck, NoopAuditSink};

#[cfg(test)]
pub(crate) use audit_events::testing;
