//! Store Module
//!
//! Document storage seam for todos. The repository talks to storage only
//! through [`TodoCollection`], so the MongoDB collection used in production
//! can be swapped for [`MemoryCollection`] in tests.

pub mod memory;
pub mod mongo;

pub use memory::MemoryCollection;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A todo as persisted in the `todos` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub description: String,
    /// Documents written before the flag existed read back as open
    #[serde(default)]
    pub completed: bool,
}

/// A todo about to be inserted; storage assigns the `_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodoDocument {
    pub description: String,
    pub completed: bool,
}

/// Storage error type
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Insert did not return an ObjectId")]
    MissingInsertedId,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Single-document operations over the todo collection
#[async_trait]
pub trait TodoCollection: Send + Sync {
    /// All documents in natural storage order
    async fn all(&self) -> StoreResult<Vec<TodoDocument>>;

    /// Insert a document and return its assigned id
    async fn insert(&self, doc: NewTodoDocument) -> StoreResult<ObjectId>;

    /// Delete at most one document, returning the deleted count
    async fn remove(&self, id: ObjectId) -> StoreResult<u64>;

    /// Set `completed` on at most one document, returning the matched count
    async fn set_completed(&self, id: ObjectId, completed: bool) -> StoreResult<u64>;

    /// The document with this `_id`, if any
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<TodoDocument>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_document_without_completed_reads_as_open() {
        let id = ObjectId::new();
        let doc: TodoDocument = from_document(doc! {
            "_id": id,
            "description": "legacy",
        })
        .unwrap();

        assert_eq!(doc.id, id);
        assert!(!doc.completed);
    }

    #[test]
    fn test_new_document_has_no_id_field() {
        let doc = to_document(&NewTodoDocument {
            description: "buy milk".to_string(),
            completed: false,
        })
        .unwrap();

        assert!(!doc.contains_key("_id"));
        assert!(!doc.get_bool("completed").unwrap());
    }
}
