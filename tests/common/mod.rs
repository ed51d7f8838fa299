//! Common test utilities for auditpack CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated audit root plus an isolated user config dir
//! - Fixtures: a complete asset tree matching the built-in required table
//! - Assertion helpers for archives and NDJSON output

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
