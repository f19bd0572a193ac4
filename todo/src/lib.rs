//! TodoStore - persistent todo list with derived counters
//!
//! Owns an ordered collection of todo items, rewrites it wholesale to a
//! key-value storage slot after every mutation, and derives summary counts
//! on demand. Destructive bulk operations (delete-all, clear-completed) use
//! a request/confirm token protocol so no store call ever blocks on input.
//!
//! # Architecture
//!
//! ```text
//! <store_path>/
//! └── todos.json       # the whole collection, a JSON array of Todo records
//! ```
//!
//! # Example
//!
//! ```ignore
//! use todostore::{FileStorage, TodoStore, UuidIdGenerator};
//!
//! let storage = FileStorage::open(".todostore")?;
//! let mut store = TodoStore::open(storage, Box::new(UuidIdGenerator))?;
//! store.add("write the docs")?;
//! let summary = store.summary();
//! ```

pub mod cli;
pub mod config;
mod domain;
mod error;
mod storage;
mod store;
pub mod view;

pub use domain::{
    IdGenerator, SequentialIdGenerator, StatsReport, Summary, Todo, TodoId, UuidIdGenerator,
};
pub use error::StoreError;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{DestructiveAction, PendingConfirmation, TodoStore};

/// Fixed storage key for the serialized collection
pub const STORAGE_KEY: &str = "todos";
