//! Domain Services
//!
//! Stateless logic over domain entities, free of I/O.

pub mod lock_sync;

pub use lock_sync::{canonical_form, compare_locks, LockMetadata};
