//! Core TodoStore implementation
//!
//! Single source of truth for the todo collection. Every mutation is applied
//! in memory and then the whole collection is rewritten to storage, so the
//! persisted value always matches the in-memory state. Destructive bulk
//! operations go through a two-step request/confirm protocol instead of
//! blocking on a prompt.

use tracing::{debug, info, warn};

use crate::domain::{IdGenerator, StatsReport, Summary, Todo, TodoId};
use crate::error::StoreError;
use crate::storage::Storage;

/// Destructive bulk operation awaiting confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    /// Clear the entire collection
    DeleteAll,
    /// Remove only completed items
    ClearCompleted,
}

impl DestructiveAction {
    /// Prompt text shown to the user before confirming
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::DeleteAll => "Are you sure you want to delete all todos?",
            Self::ClearCompleted => "Delete all completed todos?",
        }
    }
}

/// Token for a requested destructive operation
///
/// Returned by `request_delete_all` / `request_clear_completed` once their
/// preconditions hold. Nothing happens until the token is passed to
/// `confirm`; dropping it or passing it to `cancel` leaves the store and the
/// persisted value untouched.
#[derive(Debug)]
pub struct PendingConfirmation {
    action: DestructiveAction,
}

impl PendingConfirmation {
    /// The operation awaiting confirmation
    pub fn action(&self) -> DestructiveAction {
        self.action
    }
}

/// The todo collection and its persistence
pub struct TodoStore<S: Storage> {
    storage: S,
    ids: Box<dyn IdGenerator>,
    todos: Vec<Todo>,
}

impl<S: Storage> TodoStore<S> {
    /// Open the store, loading any previously persisted collection
    ///
    /// A missing or unparseable stored value yields an empty collection;
    /// startup never fails on bad data.
    pub fn open(storage: S, ids: Box<dyn IdGenerator>) -> Result<Self, StoreError> {
        let todos = match storage.get(crate::STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Todo>>(&raw) {
                Ok(todos) => todos,
                Err(e) => {
                    warn!(error = %e, "Persisted todos unparseable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!(count = todos.len(), "Opened todo store");
        Ok(Self { storage, ids, todos })
    }

    /// The current collection, in insertion order
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Derived total/completed/active counts
    pub fn summary(&self) -> Summary {
        Summary::of(&self.todos)
    }

    /// Stats report including the completion rate
    pub fn stats(&self) -> StatsReport {
        StatsReport::of(&self.todos)
    }

    /// Append a new todo with the given text
    ///
    /// The text is trimmed; empty or whitespace-only input is rejected with
    /// `EmptyText` and nothing changes.
    pub fn add(&mut self, text: &str) -> Result<&Todo, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let todo = Todo::new(self.ids.next_id(), text);
        self.todos.push(todo);
        if let Err(e) = self.persist() {
            // Keep memory in step with storage on a failed write
            self.todos.pop();
            return Err(e);
        }
        let todo = self.todos.last().unwrap();
        info!(id = %todo.id, "Added todo");
        Ok(todo)
    }

    /// Flip the completion flag of the todo with the given id
    ///
    /// Unknown ids are a silent no-op; the collection is persisted either way.
    pub fn toggle(&mut self, id: &TodoId) -> Result<(), StoreError> {
        if let Some(todo) = self.todos.iter_mut().find(|t| &t.id == id) {
            todo.completed = !todo.completed;
            debug!(%id, completed = todo.completed, "Toggled todo");
        }
        self.persist()
    }

    /// Remove the todo with the given id
    ///
    /// Unknown ids are a silent no-op; the collection is persisted either way.
    pub fn delete(&mut self, id: &TodoId) -> Result<(), StoreError> {
        let before = self.todos.len();
        self.todos.retain(|t| &t.id != id);
        if self.todos.len() < before {
            info!(%id, "Deleted todo");
        }
        self.persist()
    }

    /// Request clearing the entire collection
    pub fn request_delete_all(&self) -> Result<PendingConfirmation, StoreError> {
        if self.todos.is_empty() {
            return Err(StoreError::EmptyCollection);
        }
        Ok(PendingConfirmation {
            action: DestructiveAction::DeleteAll,
        })
    }

    /// Request removing all completed items
    pub fn request_clear_completed(&self) -> Result<PendingConfirmation, StoreError> {
        if !self.todos.iter().any(|t| t.completed) {
            return Err(StoreError::NothingToClear);
        }
        Ok(PendingConfirmation {
            action: DestructiveAction::ClearCompleted,
        })
    }

    /// Apply a confirmed destructive operation and persist
    pub fn confirm(&mut self, pending: PendingConfirmation) -> Result<(), StoreError> {
        match pending.action {
            DestructiveAction::DeleteAll => {
                info!(count = self.todos.len(), "Deleting all todos");
                self.todos.clear();
            }
            DestructiveAction::ClearCompleted => {
                let before = self.todos.len();
                self.todos.retain(|t| !t.completed);
                info!(cleared = before - self.todos.len(), "Cleared completed todos");
            }
        }
        self.persist()
    }

    /// Discard a pending destructive operation; state and storage untouched
    pub fn cancel(&mut self, pending: PendingConfirmation) {
        debug!(action = ?pending.action, "Cancelled destructive operation");
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.todos).map_err(crate::storage::StorageError::Json)?;
        self.storage.set(crate::STORAGE_KEY, &raw)?;
        Ok(())
    }
}
