//! CLI argument parsing for todostore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about = "Persistent todo list with derived counters", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new todo item
    Add {
        /// Item text (joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List all todos with counters
    List,

    /// Flip a todo's completion flag
    Toggle {
        /// Id of the todo to toggle
        #[arg(required = true)]
        id: String,
    },

    /// Delete a single todo
    Delete {
        /// Id of the todo to delete
        #[arg(required = true)]
        id: String,
    },

    /// Delete the entire collection
    DeleteAll {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove all completed todos
    ClearCompleted {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show totals and completion rate
    Stats,
}
