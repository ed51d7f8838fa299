//! Domain Layer
//!
//! Pure audit logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Inventory table, lock documents, findings, manifest
//! - `value_objects/` - Immutable value types (AssetPath, ContentHash, statuses)
//! - `services/` - Stateless checks (lock synchronization)
//! - `ports/` - Interface definitions implemented by the outer layers

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
