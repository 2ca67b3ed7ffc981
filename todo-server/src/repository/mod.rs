//! Repository Module
//!
//! Data access layer for the server. Translates between the string ids used
//! on the API and the storage-native ids, and between stored documents and
//! the `Todo` domain type.

pub mod id;
pub mod todo;

pub use todo::{RepositoryError, TodoRepository};
