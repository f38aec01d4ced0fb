//! Core library modules.
//!
//! - **Model**: `task` (records and modes), `clock`, `error`
//! - **Core**: `store` (task list), `query` (filter/sort/view derivation),
//!   `controller` (intent dispatch)
//! - **Presentation**: `view`, `messages`
//! - **Environment**: `config`, `data_storage`
//!
//! ```rust
//! use taskly::libs::clock::SystemClock;
//! use taskly::libs::store::TaskStore;
//! use taskly::libs::task::Priority;
//!
//! let mut store = TaskStore::new(SystemClock);
//! let task = store.add("Write report", Priority::High).unwrap();
//! assert!(store.toggle(&task.id));
//! ```

pub mod clock;
pub mod config;
pub mod controller;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod query;
pub mod store;
pub mod task;
pub mod view;
