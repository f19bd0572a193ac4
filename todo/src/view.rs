//! Derived view model for rendering
//!
//! `render` maps the collection and its summary to a plain data structure so
//! any shell (terminal list, TUI, web) can display it without reaching into
//! the store, and the mapping itself stays testable without I/O.

use crate::domain::{Summary, Todo};

/// Placeholder shown when the collection is empty
pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above!";

/// One displayable row of the todo list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

/// Counter labels derived from the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterLabels {
    pub total: String,
    pub completed: String,
    pub active: String,
}

/// Everything a shell needs to display the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Rows in insertion order; empty when the collection is empty
    pub rows: Vec<TodoRow>,
    pub counters: CounterLabels,
    /// Set only when there are no rows
    pub empty_message: Option<&'static str>,
}

/// Build the view model for the current collection state
pub fn render(todos: &[Todo], summary: Summary) -> ViewModel {
    let rows = todos
        .iter()
        .map(|t| TodoRow {
            id: t.id.to_string(),
            text: t.text.clone(),
            completed: t.completed,
            created_at: t.created_at.clone(),
        })
        .collect::<Vec<_>>();

    let counters = CounterLabels {
        total: format!("{} Items Total", summary.total),
        completed: format!("{} Completed", summary.completed),
        active: format!("{} Active", summary.active),
    };

    let empty_message = rows.is_empty().then_some(EMPTY_MESSAGE);

    ViewModel {
        rows,
        counters,
        empty_message,
    }
}
