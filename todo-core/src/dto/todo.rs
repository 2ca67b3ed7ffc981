//! Todo request DTOs

use serde::{Deserialize, Serialize};

/// Request to create a new todo
///
/// `completed` is not accepted here; every todo starts open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub description: String,
}

/// Request to change the completion flag of a todo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_todo_requires_description() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_todo_rejects_non_string_description() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"description":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_todo_ignores_unknown_fields() {
        let req: CreateTodo =
            serde_json::from_str(r#"{"description":"buy milk","priority":"high"}"#).unwrap();
        assert_eq!(req.description, "buy milk");
    }

    #[test]
    fn test_update_todo_rejects_string_completed() {
        let result: Result<UpdateTodo, _> = serde_json::from_str(r#"{"completed":"true"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_todo_requires_completed() {
        let result: Result<UpdateTodo, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }
}
