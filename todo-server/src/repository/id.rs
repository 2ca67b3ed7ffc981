//! Identifier boundary
//!
//! `ObjectId` never leaves the server; everything outside sees 24-character
//! hex strings.

use mongodb::bson::oid::ObjectId;

use super::RepositoryError;

/// Parse an API id into a storage id
pub fn parse_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string()))
}

/// Format a storage id for the API
pub fn format_id(id: &ObjectId) -> String {
    id.to_hex()
}
