use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::io::Write;

use todostore::cli::{Cli, Command};
use todostore::config::Config;
use todostore::{FileStorage, StoreError, TodoId, TodoStore, UuidIdGenerator, view};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn open_store(config: &Config) -> Result<TodoStore<FileStorage>> {
    let storage = FileStorage::open(&config.store_path).context("Failed to open storage")?;
    let store = TodoStore::open(storage, Box::new(UuidIdGenerator))?;
    Ok(store)
}

/// Ask a y/N question on the terminal
fn confirm_prompt(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn warn_user(err: &StoreError) {
    println!("{} {}", "!".yellow(), err.to_string().yellow());
}

fn print_list(store: &TodoStore<FileStorage>) {
    let vm = view::render(store.todos(), store.summary());

    if let Some(message) = vm.empty_message {
        println!("{}", message.dimmed());
    } else {
        for row in &vm.rows {
            let mark = if row.completed { "[x]" } else { "[ ]" };
            let text = if row.completed {
                row.text.dimmed().strikethrough().to_string()
            } else {
                row.text.clone()
            };
            println!("{} {} {} {}", mark, row.id.cyan(), text, row.created_at.dimmed());
        }
    }

    println!();
    println!("{}", vm.counters.total);
    println!("{}", vm.counters.completed.green());
    println!("{}", vm.counters.active.blue());
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("todostore starting");

    match cli.command {
        Command::Add { text } => {
            let mut store = open_store(&config)?;
            match store.add(&text.join(" ")) {
                Ok(todo) => println!("{} Added: {}", "✓".green(), todo.id.to_string().cyan()),
                Err(e) if e.is_warning() => warn_user(&e),
                Err(e) => return Err(e.into()),
            }
        }
        Command::List => {
            let store = open_store(&config)?;
            print_list(&store);
        }
        Command::Toggle { id } => {
            let mut store = open_store(&config)?;
            store.toggle(&TodoId::from(id.as_str()))?;
            print_list(&store);
        }
        Command::Delete { id } => {
            let mut store = open_store(&config)?;
            store.delete(&TodoId::from(id.as_str()))?;
            print_list(&store);
        }
        Command::DeleteAll { yes } => {
            let mut store = open_store(&config)?;
            match store.request_delete_all() {
                Ok(pending) => {
                    if yes || confirm_prompt(pending.action().prompt())? {
                        store.confirm(pending)?;
                        println!("{} Deleted all todos", "✓".green());
                    } else {
                        store.cancel(pending);
                    }
                }
                Err(e) if e.is_warning() => warn_user(&e),
                Err(e) => return Err(e.into()),
            }
        }
        Command::ClearCompleted { yes } => {
            let mut store = open_store(&config)?;
            match store.request_clear_completed() {
                Ok(pending) => {
                    if yes || confirm_prompt(pending.action().prompt())? {
                        store.confirm(pending)?;
                        println!("{} Cleared completed todos", "✓".green());
                    } else {
                        store.cancel(pending);
                    }
                }
                Err(e) if e.is_warning() => warn_user(&e),
                Err(e) => return Err(e.into()),
            }
        }
        Command::Stats => {
            let store = open_store(&config)?;
            let stats = store.stats();
            println!("Total Todos: {}", stats.total);
            println!("Completed: {}", stats.completed.to_string().green());
            println!("Active: {}", stats.active.to_string().blue());
            println!("Completion Rate: {}%", stats.completion_rate);
        }
    }

    Ok(())
}
