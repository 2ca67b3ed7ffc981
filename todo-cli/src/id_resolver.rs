//! ID resolver module
//!
//! Resolves id prefixes to full todo ids by querying the API, so users can
//! type `todo done 65a1` instead of the whole id.

use anyhow::{Context, Result, anyhow};
use todo_client::TodoClient;
use todo_core::domain::todo::Todo;

use crate::types::IdOrPrefix;

/// Resolve a todo id or prefix to a full id
///
/// Full ids are returned as-is without an API call.
///
/// # Errors
/// Returns an error if:
/// - No todo matches the prefix
/// - Multiple todos match the prefix (ambiguous)
/// - API call fails
pub async fn resolve_todo_id(client: &TodoClient, id_or_prefix: &IdOrPrefix) -> Result<String> {
    if let Some(id) = id_or_prefix.as_full() {
        return Ok(id.to_string());
    }

    let todos = client
        .list_todos()
        .await
        .context("Failed to fetch todos for ID resolution")?;

    resolve_in(&todos, id_or_prefix.as_str())
}

/// Find the single todo whose id starts with `prefix`
fn resolve_in(todos: &[Todo], prefix: &str) -> Result<String> {
    if prefix.is_empty() {
        return Err(anyhow!("Todo ID cannot be empty"));
    }

    let matches: Vec<_> = todos
        .iter()
        .filter(|t| t.id.to_lowercase().starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [] => Err(anyhow!("No todo found with ID starting with '{}'", prefix)),
        [todo] => Ok(todo.id.clone()),
        _ => {
            let ids: Vec<&str> = matches.iter().map(|t| t.id.as_str()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple todos: {}",
                prefix,
                ids.join(", ")
            ))
        }
    }
}
