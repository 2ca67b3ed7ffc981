//! API Module
//!
//! HTTP API layer for the todo server.

pub mod error;
pub mod health;
pub mod todo;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::repository::TodoRepository;

/// Create the main API router with all endpoints
///
/// The trailing-slash variants are served as well; browser front ends
/// written against the previous backend still request them.
pub fn create_router(repo: TodoRepository) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Collection endpoints
        .route("/todos", get(todo::list_todos).post(todo::create_todo))
        .route("/todos/", get(todo::list_todos).post(todo::create_todo))
        // Item endpoints
        .route(
            "/todos/{id}",
            get(todo::get_todo)
                .patch(todo::update_todo)
                .delete(todo::delete_todo),
        )
        .route(
            "/todos/{id}/",
            get(todo::get_todo)
                .patch(todo::update_todo)
                .delete(todo::delete_todo),
        )
        // Add state and middleware
        .with_state(repo)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
