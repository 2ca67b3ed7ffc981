//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod todo;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List todos
    List {
        /// Only show todos that are not completed
        #[arg(long, conflicts_with = "completed")]
        pending: bool,

        /// Only show completed todos
        #[arg(long)]
        completed: bool,
    },
    /// Add a new todo
    Add {
        /// What needs doing
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Show a single todo
    Show {
        /// Todo ID or unambiguous prefix
        id: String,
    },
    /// Mark a todo as completed
    Done {
        /// Todo ID or unambiguous prefix
        id: String,
    },
    /// Mark a todo as not completed
    Undo {
        /// Todo ID or unambiguous prefix
        id: String,
    },
    /// Delete a todo
    Remove {
        /// Todo ID or unambiguous prefix
        id: String,
    },
}

/// Handle a CLI command
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    todo::handle_todo_command(command, config).await
}
