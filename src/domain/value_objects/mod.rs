//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_path;
mod hash;
mod status;

pub use asset_path::{AssetPath, PathError};
pub use hash::{ContentHash, HASH_CHUNK_SIZE};
pub use status::{HashStatus, LockSyncStatus, Severity, Verdict};
