//! Todo domain types

use serde::{Deserialize, Serialize};

/// A single todo item
///
/// `id` is always the string form of the storage identifier; the storage
/// representation never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub description: String,
    pub completed: bool,
}

impl Todo {
    /// Returns a copy with `completed` replaced
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_serializes_flat() {
        let todo = Todo {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            description: "buy milk".to_string(),
            completed: false,
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(json["description"], "buy milk");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_with_completed_keeps_identity() {
        let todo = Todo {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            description: "buy milk".to_string(),
            completed: false,
        };

        let done = todo.clone().with_completed(true);
        assert!(done.completed);
        assert_eq!(done.id, todo.id);
        assert_eq!(done.description, todo.description);
    }
}
