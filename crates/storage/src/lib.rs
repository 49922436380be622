//! Crossway Storage
//!
//! Session-scoped state for the Crossway aggregator: per-session swap
//! settings and last-observed transaction status snapshots. Nothing here
//! survives a restart; persistence is an external-collaborator concern.

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use traits::{Storage, StorageError, StorageResult};
