//! Command-specific views

pub mod audit;
pub mod report;
