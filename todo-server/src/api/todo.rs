//! Todo API Handlers
//!
//! HTTP endpoints for the todo collection (`/todos`) and single todos
//! (`/todos/{id}`).

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use todo_core::domain::todo::Todo;
use todo_core::dto::todo::{CreateTodo, UpdateTodo};

use crate::api::error::{ApiError, ApiResult};
use crate::repository::TodoRepository;
use crate::service::todo_service::{
    self, COMPLETED_REQUIRED, DESCRIPTION_REQUIRED, INVALID_TODO_ID,
};

// =============================================================================
// Collection Endpoints
// =============================================================================

/// GET /todos
/// List all todos
pub async fn list_todos(State(repo): State<TodoRepository>) -> ApiResult<Json<Vec<Todo>>> {
    tracing::debug!("Listing all todos");

    let todos = todo_service::list_todos(&repo).await?;

    Ok(Json(todos))
}

/// POST /todos
/// Create a new todo
pub async fn create_todo(
    State(repo): State<TodoRepository>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("Rejected create request: {}", rejection.body_text());
        ApiError::BadRequest(DESCRIPTION_REQUIRED.to_string())
    })?;

    let todo = todo_service::create_todo(&repo, req).await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

// =============================================================================
// Item Endpoints
// =============================================================================

/// Unwrap the `{id}` path segment, answering undecodable ids with the same
/// JSON 400 as ids storage cannot parse
fn todo_id(path: Result<Path<String>, PathRejection>) -> ApiResult<String> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Rejected todo id: {}", rejection.body_text());
        ApiError::BadRequest(format!("{}: {}", INVALID_TODO_ID, rejection.body_text()))
    })
}

/// GET /todos/{id}
/// Get a todo by ID
pub async fn get_todo(
    State(repo): State<TodoRepository>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Todo>> {
    let id = todo_id(path)?;
    tracing::debug!("Getting todo: {}", id);

    let todo = todo_service::get_todo(&repo, &id).await?;

    Ok(Json(todo))
}

/// PATCH /todos/{id}
/// Set the completion flag of a todo
pub async fn update_todo(
    State(repo): State<TodoRepository>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> ApiResult<Json<Todo>> {
    let id = todo_id(path)?;
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("Rejected update request for {}: {}", id, rejection.body_text());
        ApiError::BadRequest(COMPLETED_REQUIRED.to_string())
    })?;

    let todo = todo_service::update_completed(&repo, &id, req).await?;

    Ok(Json(todo))
}

/// DELETE /todos/{id}
/// Delete a todo
pub async fn delete_todo(
    State(repo): State<TodoRepository>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = todo_id(path)?;
    tracing::info!("Deleting todo: {}", id);

    todo_service::delete_todo(&repo, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
