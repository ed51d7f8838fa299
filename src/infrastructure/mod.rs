//! Infrastructure Layer
//!
//! Concrete I/O used by the application layer:
//! - `fs` - Local disk access (existence checks, streamed hashing, atomic writes)
//! - `repositories` - Lock document loading
//! - `archive` - Zip bundle writing

pub mod archive;
pub mod fs;
pub mod repositories;

pub use archive::ZipBundleWriter;
pub use fs::LocalFs;
pub use repositories::LockRepository;
