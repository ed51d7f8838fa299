//! Terminal output for the `auditpack` binary
//!
//! - `primitives` / `widgets` / `blocks` - composable rendering pieces
//! - `views` - audit progress sinks and end-of-run reports
//! - `json` - NDJSON envelopes for `--json`
//! - `ci` - GitHub Actions workflow annotations

pub mod blocks;
pub mod ci;
pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
