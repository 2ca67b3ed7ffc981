//! Common types used across CLI modules

/// Length of a full todo id (hex-encoded ObjectId)
pub const FULL_ID_LEN: usize = 24;

/// Identifier that can be either a full todo id or an unambiguous prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdOrPrefix {
    /// Full 24-character hex id
    Full(String),
    /// Prefix that should uniquely identify a todo
    Prefix(String),
}

impl IdOrPrefix {
    /// Parse a string into an IdOrPrefix
    ///
    /// Input is normalized to lowercase; 24 hex characters make a full id.
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        if input.len() == FULL_ID_LEN && input.chars().all(|c| c.is_ascii_hexdigit()) {
            IdOrPrefix::Full(input)
        } else {
            IdOrPrefix::Prefix(input)
        }
    }

    /// Get the id if this is a full id
    pub fn as_full(&self) -> Option<&str> {
        match self {
            IdOrPrefix::Full(id) => Some(id),
            IdOrPrefix::Prefix(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            IdOrPrefix::Full(id) | IdOrPrefix::Prefix(id) => id,
        }
    }
}
