//! MongoDB-backed todo collection

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{doc, oid::ObjectId};

use super::{NewTodoDocument, StoreError, StoreResult, TodoCollection, TodoDocument};

#[async_trait]
impl TodoCollection for Collection<TodoDocument> {
    async fn all(&self) -> StoreResult<Vec<TodoDocument>> {
        let cursor = self.find(doc! {}).await?;
        let docs: Vec<TodoDocument> = cursor.try_collect().await?;
        Ok(docs)
    }

    async fn insert(&self, doc: NewTodoDocument) -> StoreResult<ObjectId> {
        let result = self
            .clone_with_type::<NewTodoDocument>()
            .insert_one(doc)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingInsertedId)
    }

    async fn remove(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn set_completed(&self, id: ObjectId, completed: bool) -> StoreResult<u64> {
        let result = self
            .update_one(doc! { "_id": id }, doc! { "$set": { "completed": completed } })
            .await?;
        Ok(result.matched_count)
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<TodoDocument>> {
        Ok(self.find_one(doc! { "_id": id }).await?)
    }
}
