//! Data Transfer Objects
//!
//! Request bodies accepted by the todo API. Handlers deserialize these
//! before any business logic runs, so shape errors never reach storage.

pub mod todo;
