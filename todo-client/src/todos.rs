//! Todo API endpoints

use crate::TodoClient;
use crate::error::Result;
use todo_core::domain::todo::Todo;
use todo_core::dto::todo::{CreateTodo, UpdateTodo};

impl TodoClient {
    /// List all todos
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let url = self.todos_url(None)?;
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Create a new todo
    ///
    /// # Example
    /// ```no_run
    /// # use todo_client::TodoClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = TodoClient::new("http://localhost:8000");
    /// let todo = client.create_todo("buy milk").await?;
    /// assert!(!todo.completed);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_todo(&self, description: impl Into<String>) -> Result<Todo> {
        let url = self.todos_url(None)?;
        let req = CreateTodo {
            description: description.into(),
        };
        let response = self.client.post(url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Get a todo by ID
    pub async fn get_todo(&self, id: &str) -> Result<Todo> {
        let url = self.todos_url(Some(id))?;
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Set the completion flag of a todo
    ///
    /// # Returns
    /// The todo as stored after the update
    pub async fn set_completed(&self, id: &str, completed: bool) -> Result<Todo> {
        let url = self.todos_url(Some(id))?;
        let response = self
            .client
            .patch(url)
            .json(&UpdateTodo { completed })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a todo
    pub async fn delete_todo(&self, id: &str) -> Result<()> {
        let url = self.todos_url(Some(id))?;
        let response = self.client.delete(url).send().await?;

        self.handle_empty_response(response).await
    }
}
