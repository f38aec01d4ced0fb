//! Persistence layer.
//!
//! The task list is stored as one JSON blob in a string-keyed blob store.
//!
//! ```rust
//! use taskly::db::{blob::MemoryBlobStore, tasks::Tasks};
//!
//! let mut tasks = Tasks::new(MemoryBlobStore::new());
//! tasks.save(&[]).unwrap();
//! assert!(tasks.load().unwrap().is_empty());
//! ```

/// Key-value blob storage: the file-backed store used by the binary and an
/// in-memory store for tests and embedding.
pub mod blob;

/// Task list snapshot save/load on top of a blob store.
pub mod tasks;
