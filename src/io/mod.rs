//! I/O module
//!
//! Handles the persistent store.
//!
//! # Components
//!
//! - `snapshot_format` - Store text format (record conversion, snapshot serialization)
//! - `file_store` - File-backed store with atomic whole-file replacement
//! - `memory_store` - In-memory store sharing the same text format

pub mod file_store;
pub mod memory_store;
pub mod snapshot_format;

pub use file_store::{FileStore, DEFAULT_DATA_FILE};
pub use memory_store::MemoryStore;
pub use snapshot_format::{
    convert_snapshot_record, normalize_owner_name, read_snapshot, write_snapshot, SnapshotRecord,
};
