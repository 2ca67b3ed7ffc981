//! Todo Repository
//!
//! Handles all storage operations related to todos.

use std::sync::Arc;

use thiserror::Error;
use todo_core::domain::todo::Todo;

use super::id::{format_id, parse_id};
use crate::store::{NewTodoDocument, StoreError, TodoCollection, TodoDocument};

/// Repository error type
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Todo storage wrapper
///
/// Cheap to clone; clones share the underlying collection.
#[derive(Clone)]
pub struct TodoRepository {
    collection: Arc<dyn TodoCollection>,
}

impl TodoRepository {
    pub fn new(collection: Arc<dyn TodoCollection>) -> Self {
        Self { collection }
    }

    /// List all todos in storage order
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let docs = self.collection.all().await?;
        Ok(docs.into_iter().map(Todo::from).collect())
    }

    /// Create a new, open todo
    pub async fn create(&self, description: &str) -> Result<Todo> {
        let id = self
            .collection
            .insert(NewTodoDocument {
                description: description.to_string(),
                completed: false,
            })
            .await?;

        Ok(Todo {
            id: format_id(&id),
            description: description.to_string(),
            completed: false,
        })
    }

    /// Delete a todo by id, returning the number of deleted documents
    pub async fn delete(&self, id: &str) -> Result<u64> {
        let id = parse_id(id)?;
        Ok(self.collection.remove(id).await?)
    }

    /// Set the completion flag, returning the number of matched documents
    pub async fn update_completed(&self, id: &str, completed: bool) -> Result<u64> {
        let id = parse_id(id)?;
        Ok(self.collection.set_completed(id, completed).await?)
    }

    /// Find a todo by id
    pub async fn get(&self, id: &str) -> Result<Option<Todo>> {
        let id = parse_id(id)?;
        let doc = self.collection.find_by_id(id).await?;
        Ok(doc.map(Todo::from))
    }
}

impl From<TodoDocument> for Todo {
    fn from(doc: TodoDocument) -> Self {
        Todo {
            id: format_id(&doc.id),
            description: doc.description,
            completed: doc.completed,
        }
    }
}
