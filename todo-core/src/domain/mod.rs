//! Core domain types
//!
//! These types represent the entities exchanged between the server
//! (which persists them) and the client and CLI (which display them).

pub mod todo;
