//! Store error types

use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by store operations
///
/// The first three variants are recoverable preconditions: the collection is
/// unchanged and nothing is persisted. Only `Storage` indicates a real
/// failure (the backing store could not be read or written).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Please enter a todo item!")]
    EmptyText,

    #[error("No todos to delete!")]
    EmptyCollection,

    #[error("No completed todos to clear!")]
    NothingToClear,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Check if this is a soft warning (rejected precondition, state intact)
    pub fn is_warning(&self) -> bool {
        !matches!(self, StoreError::Storage(_))
    }
}
