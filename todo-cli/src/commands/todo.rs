//! Todo command handlers

use anyhow::{Result, bail};
use colored::*;
use todo_client::TodoClient;
use todo_core::domain::todo::Todo;

use super::Commands;
use crate::config::Config;
use crate::id_resolver::resolve_todo_id;
use crate::types::IdOrPrefix;

/// Which todos `list` shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListFilter {
    All,
    Pending,
    Completed,
}

impl ListFilter {
    fn from_flags(pending: bool, completed: bool) -> Self {
        match (pending, completed) {
            (true, _) => ListFilter::Pending,
            (_, true) => ListFilter::Completed,
            _ => ListFilter::All,
        }
    }

    fn matches(self, todo: &Todo) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Pending => !todo.completed,
            ListFilter::Completed => todo.completed,
        }
    }
}

/// Route a command to its handler
pub async fn handle_todo_command(command: Commands, config: &Config) -> Result<()> {
    let client = TodoClient::new(&config.api_url);

    match command {
        Commands::List { pending, completed } => {
            list_todos(&client, ListFilter::from_flags(pending, completed)).await
        }
        Commands::Add { description } => add_todo(&client, &description.join(" ")).await,
        Commands::Show { id } => show_todo(&client, &id).await,
        Commands::Done { id } => set_completed(&client, &id, true).await,
        Commands::Undo { id } => set_completed(&client, &id, false).await,
        Commands::Remove { id } => remove_todo(&client, &id).await,
    }
}

async fn list_todos(client: &TodoClient, filter: ListFilter) -> Result<()> {
    let todos: Vec<Todo> = client
        .list_todos()
        .await?
        .into_iter()
        .filter(|t| filter.matches(t))
        .collect();

    if todos.is_empty() {
        println!("{}", "No todos found.".yellow());
        return Ok(());
    }

    let open = todos.iter().filter(|t| !t.completed).count();
    println!(
        "{}",
        format!("{} todo(s), {} open:", todos.len(), open).bold()
    );
    println!();
    for todo in &todos {
        print_todo_line(todo);
    }

    Ok(())
}

async fn add_todo(client: &TodoClient, description: &str) -> Result<()> {
    if description.trim().is_empty() {
        bail!("Description cannot be empty");
    }

    let todo = client.create_todo(description).await?;

    println!("{}", "✓ Todo added!".green().bold());
    println!("  ID:          {}", todo.id.cyan());
    println!("  Description: {}", todo.description.bold());

    Ok(())
}

async fn show_todo(client: &TodoClient, id: &str) -> Result<()> {
    let id = resolve_todo_id(client, &IdOrPrefix::parse(id)).await?;
    let todo = client.get_todo(&id).await?;

    println!("{}", "Todo Details".bold().underline());
    println!("  ID:          {}", todo.id.cyan());
    println!("  Description: {}", todo.description.bold());
    println!("  Status:      {}", status_label(&todo));

    Ok(())
}

async fn set_completed(client: &TodoClient, id: &str, completed: bool) -> Result<()> {
    let id = resolve_todo_id(client, &IdOrPrefix::parse(id)).await?;
    let todo = client.set_completed(&id, completed).await?;

    let verb = if completed { "completed" } else { "reopened" };
    println!("{}", format!("✓ Todo {}!", verb).green().bold());
    print_todo_line(&todo);

    Ok(())
}

async fn remove_todo(client: &TodoClient, id: &str) -> Result<()> {
    let id = resolve_todo_id(client, &IdOrPrefix::parse(id)).await?;
    client.delete_todo(&id).await?;

    println!(
        "{}",
        format!("✓ Todo {} deleted!", id).green().bold()
    );

    Ok(())
}

fn status_label(todo: &Todo) -> ColoredString {
    if todo.completed {
        "done".green()
    } else {
        "open".yellow()
    }
}

fn print_todo_line(todo: &Todo) {
    let mark = if todo.completed { "✓".green() } else { "○".yellow() };
    let description = if todo.completed {
        todo.description.dimmed()
    } else {
        todo.description.normal()
    };
    println!("  {} {} {}", mark, short_id(&todo.id).cyan(), description);
}

/// First eight characters of an id, or the whole id if it is shorter or
/// not cut on a character boundary
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(completed: bool) -> Todo {
        Todo {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            description: "x".to_string(),
            completed,
        }
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("65a1f0c2e4b0a1b2c3d4e5f6"), "65a1f0c2");
        assert_eq!(short_id("65a1"), "65a1");
        // 'é' spans bytes 7..9, so byte 8 is not a char boundary
        assert_eq!(short_id("abcdefgé1"), "abcdefgé1");
    }

    #[test]
    fn test_filter_from_flags() {
        assert_eq!(ListFilter::from_flags(false, false), ListFilter::All);
        assert_eq!(ListFilter::from_flags(true, false), ListFilter::Pending);
        assert_eq!(ListFilter::from_flags(false, true), ListFilter::Completed);
    }

    #[test]
    fn test_filter_matches() {
        assert!(ListFilter::All.matches(&todo(true)));
        assert!(ListFilter::Pending.matches(&todo(false)));
        assert!(!ListFilter::Pending.matches(&todo(true)));
        assert!(ListFilter::Completed.matches(&todo(true)));
        assert!(!ListFilter::Completed.matches(&todo(false)));
    }
}
