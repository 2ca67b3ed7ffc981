//! In-memory todo collection
//!
//! Keeps documents in insertion order behind a lock. Used by tests and
//! anywhere a MongoDB instance is not available.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{NewTodoDocument, StoreResult, TodoCollection, TodoDocument};

#[derive(Debug, Default)]
pub struct MemoryCollection {
    docs: RwLock<Vec<TodoDocument>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection pre-populated with documents
    pub fn with_documents(docs: Vec<TodoDocument>) -> Self {
        Self {
            docs: RwLock::new(docs),
        }
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl TodoCollection for MemoryCollection {
    async fn all(&self) -> StoreResult<Vec<TodoDocument>> {
        Ok(self.docs.read().await.clone())
    }

    async fn insert(&self, doc: NewTodoDocument) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        self.docs.write().await.push(TodoDocument {
            id,
            description: doc.description,
            completed: doc.completed,
        });
        Ok(id)
    }

    async fn remove(&self, id: ObjectId) -> StoreResult<u64> {
        let mut docs = self.docs.write().await;
        match docs.iter().position(|d| d.id == id) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn set_completed(&self, id: ObjectId, completed: bool) -> StoreResult<u64> {
        let mut docs = self.docs.write().await;
        match docs.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.completed = completed;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<TodoDocument>> {
        Ok(self.docs.read().await.iter().find(|d| d.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_doc(description: &str) -> NewTodoDocument {
        NewTodoDocument {
            description: description.to_string(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let collection = MemoryCollection::new();
        let a = collection.insert(new_doc("a")).await.unwrap();
        let b = collection.insert(new_doc("b")).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(collection.len().await, 2);
    }

    #[tokio::test]
    async fn test_all_keeps_insertion_order() {
        let collection = MemoryCollection::new();
        collection.insert(new_doc("first")).await.unwrap();
        collection.insert(new_doc("second")).await.unwrap();

        let docs = collection.all().await.unwrap();
        let descriptions: Vec<_> = docs.iter().map(|d| d.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_remove_deletes_at_most_one() {
        let collection = MemoryCollection::new();
        let id = collection.insert(new_doc("a")).await.unwrap();

        assert_eq!(collection.remove(id).await.unwrap(), 1);
        assert_eq!(collection.remove(id).await.unwrap(), 0);
        assert!(collection.is_empty().await);
    }

    #[tokio::test]
    async fn test_set_completed_reports_matches() {
        let collection = MemoryCollection::new();
        let id = collection.insert(new_doc("a")).await.unwrap();

        assert_eq!(collection.set_completed(id, true).await.unwrap(), 1);
        assert_eq!(collection.set_completed(ObjectId::new(), true).await.unwrap(), 0);

        let doc = collection.find_by_id(id).await.unwrap().unwrap();
        assert!(doc.completed);
    }
}
