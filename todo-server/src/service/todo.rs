//! Todo Service
//!
//! Business logic for todo management.

use todo_core::domain::todo::Todo;
use todo_core::dto::todo::{CreateTodo, UpdateTodo};

use crate::repository::{RepositoryError, TodoRepository};
use crate::store::StoreError;

pub const DESCRIPTION_REQUIRED: &str = "Description is required and must be a string";
pub const COMPLETED_REQUIRED: &str = "Completed must be a boolean";
pub const TODO_NOT_FOUND: &str = "Todo not found";
pub const INVALID_TODO_ID: &str = "Invalid todo id";

/// Service error type
#[derive(Debug)]
pub enum TodoError {
    NotFound(String),
    InvalidId(String),
    ValidationError(String),
    StoreError(StoreError),
}

impl From<RepositoryError> for TodoError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidId(id) => TodoError::InvalidId(id),
            RepositoryError::Store(err) => TodoError::StoreError(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

/// Create a new todo
pub async fn create_todo(repo: &TodoRepository, req: CreateTodo) -> Result<Todo> {
    validate_create_request(&req)?;

    let todo = repo.create(&req.description).await?;

    tracing::info!("Todo created: {}", todo.id);

    Ok(todo)
}

/// List all todos
pub async fn list_todos(repo: &TodoRepository) -> Result<Vec<Todo>> {
    let todos = repo.list().await?;
    Ok(todos)
}

/// Get a todo by ID
pub async fn get_todo(repo: &TodoRepository, id: &str) -> Result<Todo> {
    let todo = repo
        .get(id)
        .await?
        .ok_or_else(|| TodoError::NotFound(id.to_string()))?;

    Ok(todo)
}

/// Delete a todo
pub async fn delete_todo(repo: &TodoRepository, id: &str) -> Result<()> {
    let deleted = repo.delete(id).await?;

    if deleted == 0 {
        return Err(TodoError::NotFound(id.to_string()));
    }

    tracing::info!("Todo deleted: {}", id);

    Ok(())
}

/// Update the completion flag and return the refreshed todo
pub async fn update_completed(repo: &TodoRepository, id: &str, req: UpdateTodo) -> Result<Todo> {
    let matched = repo.update_completed(id, req.completed).await?;

    if matched == 0 {
        return Err(TodoError::NotFound(id.to_string()));
    }

    tracing::info!("Todo {} marked completed={}", id, req.completed);

    // Another request may delete it in between
    get_todo(repo, id).await
}

// =============================================================================
// Validation
// =============================================================================

fn validate_create_request(req: &CreateTodo) -> Result<()> {
    if req.description.is_empty() {
        return Err(TodoError::ValidationError(DESCRIPTION_REQUIRED.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCollection;
    use std::sync::Arc;

    fn repository() -> (TodoRepository, Arc<MemoryCollection>) {
        let collection = Arc::new(MemoryCollection::new());
        (TodoRepository::new(collection.clone()), collection)
    }

    #[test]
    fn test_validate_empty_description() {
        let req = CreateTodo {
            description: "".to_string(),
        };

        let result = validate_create_request(&req);
        assert!(matches!(
            result,
            Err(TodoError::ValidationError(msg)) if msg == DESCRIPTION_REQUIRED
        ));
    }

    #[test]
    fn test_validate_valid_request() {
        let req = CreateTodo {
            description: "buy milk".to_string(),
        };

        assert!(validate_create_request(&req).is_ok());
    }

    #[tokio::test]
    async fn test_create_rejected_leaves_storage_untouched() {
        let (repo, collection) = repository();

        let result = create_todo(
            &repo,
            CreateTodo {
                description: String::new(),
            },
        )
        .await;

        assert!(matches!(result, Err(TodoError::ValidationError(_))));
        assert!(collection.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (repo, _) = repository();
        let id = mongodb::bson::oid::ObjectId::new().to_hex();

        let result = delete_todo(&repo, &id).await;
        assert!(matches!(result, Err(TodoError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_update_returns_refreshed_todo() {
        let (repo, _) = repository();
        let todo = create_todo(
            &repo,
            CreateTodo {
                description: "buy milk".to_string(),
            },
        )
        .await
        .unwrap();

        let updated = update_completed(&repo, &todo.id, UpdateTodo { completed: true })
            .await
            .unwrap();

        assert_eq!(updated.id, todo.id);
        assert_eq!(updated.description, "buy milk");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_malformed_id_is_invalid_id() {
        let (repo, _) = repository();

        let result = get_todo(&repo, "xyz").await;
        assert!(matches!(result, Err(TodoError::InvalidId(id)) if id == "xyz"));
    }
}
