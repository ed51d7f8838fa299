//! Repository Implementations

mod lock;

pub use lock::LockRepository;
