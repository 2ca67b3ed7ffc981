//! API Error Handling
//!
//! Every error response carries a `{"error": "<message>"}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::todo_service::{INVALID_TODO_ID, TODO_NOT_FOUND, TodoError};
use crate::store::StoreError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    StoreError(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::StoreError(err) => {
                tracing::error!("Storage error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => ApiError::NotFound(TODO_NOT_FOUND.to_string()),
            TodoError::InvalidId(id) => {
                ApiError::BadRequest(format!("{}: {}", INVALID_TODO_ID, id))
            }
            TodoError::ValidationError(msg) => ApiError::BadRequest(msg),
            TodoError::StoreError(err) => ApiError::StoreError(err),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::StoreError(StoreError::MissingInsertedId),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_uses_fixed_message() {
        let err = ApiError::from(TodoError::NotFound("65a1f0c2e4b0a1b2c3d4e5f6".into()));
        assert!(matches!(err, ApiError::NotFound(msg) if msg == TODO_NOT_FOUND));
    }

    #[test]
    fn test_invalid_id_is_bad_request() {
        let err = ApiError::from(TodoError::InvalidId("abc".into()));
        assert!(matches!(err, ApiError::BadRequest(msg) if msg == "Invalid todo id: abc"));
    }
}
