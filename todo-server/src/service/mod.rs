//! Service Module
//!
//! Business logic layer for the server.
//! Services sit between the HTTP handlers and the repository.

pub mod todo;

// Re-export for convenience
pub use todo as todo_service;
