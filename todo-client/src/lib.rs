//! Todo HTTP Client
//!
//! A small, type-safe HTTP client for the todo API.
//!
//! # Example
//!
//! ```no_run
//! use todo_client::TodoClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TodoClient::new("http://localhost:8000");
//!
//!     let todo = client.create_todo("buy milk").await?;
//!     client.set_completed(&todo.id, true).await?;
//!
//!     println!("Completed: {}", todo.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod todos;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use todo_core::domain::todo::Todo;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the todo API
#[derive(Debug, Clone)]
pub struct TodoClient {
    /// Base URL of the API (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl TodoClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use todo_client::TodoClient;
    ///
    /// let client = TodoClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the todo collection, or of one todo when `id` is given
    ///
    /// The id is pushed as a single percent-encoded path segment, so ids
    /// containing `/`, `?` or `%` cannot address another route.
    fn todos_url(&self, id: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ClientError::InvalidUrl(format!("{} cannot be a base URL", self.base_url))
            })?;
            segments.pop_if_empty().push("todos");
            if let Some(id) = id {
                segments.push(id);
            }
        }

        Ok(url)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!("Todo API returned {}: {}", status, error_text);
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!("Todo API returned {}: {}", status, error_text);
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
