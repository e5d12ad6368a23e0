//! Store module
//!
//! Persistence for the HR aggregate: a key-value storage abstraction with
//! file and in-memory backends, and the record store that owns the aggregate.

mod backend;
mod error;
mod repository;
pub mod seed;

pub use backend::{FileStorage, KeyValueStorage, MemoryStorage};
pub use error::{StorageError, StorageResult};
pub use repository::{
    decode, encode, HrStore, LoadOutcome, CORRUPT_SUFFIX, DEFAULT_STORAGE_KEY,
};
