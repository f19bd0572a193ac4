//! Todo domain types: ids, records, and derived counts

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    /// Get the full ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for TodoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for TodoId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TodoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

/// Source of fresh todo ids
///
/// Injected into the store so id assignment is deterministic in tests.
pub trait IdGenerator {
    /// Produce the next unique id
    fn next_id(&mut self) -> TodoId;
}

/// Default generator backed by UUID v7 (time-ordered, collision-safe)
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TodoId {
        TodoId(uuid::Uuid::now_v7().to_string())
    }
}

/// Counter-based generator producing "1", "2", ... for deterministic tests
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TodoId {
        self.next += 1;
        TodoId(self.next.to_string())
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned at creation
    pub id: TodoId,

    /// Item text; non-empty, trimmed, immutable after creation
    pub text: String,

    /// Completion flag, flipped by toggle
    pub completed: bool,

    /// Creation-date label, display-only
    pub created_at: String,
}

impl Todo {
    /// Create a new incomplete todo with today's date label
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: today_label(),
        }
    }
}

/// Today's date as a display label
pub fn today_label() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Derived counts over a todo collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of items in the collection
    pub total: usize,
    /// Number of completed items
    pub completed: usize,
    /// Number of items still open (total - completed)
    pub active: usize,
}

impl Summary {
    /// Compute the summary for a collection
    pub fn of(todos: &[Todo]) -> Self {
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            active: total - completed,
        }
    }
}

/// Read-only stats report including the completion rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsReport {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Percentage of completed items, rounded; 0 for an empty collection
    pub completion_rate: u32,
}

impl StatsReport {
    /// Compute the stats report for a collection
    pub fn of(todos: &[Todo]) -> Self {
        let summary = Summary::of(todos);
        let completion_rate = if summary.total > 0 {
            ((summary.completed as f64 / summary.total as f64) * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total: summary.total,
            completed: summary.completed,
            active: summary.active,
            completion_rate,
        }
    }
}
