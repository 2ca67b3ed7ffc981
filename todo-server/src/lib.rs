//! Todo Server
//!
//! HTTP service exposing a todo resource backed by a MongoDB collection.
//!
//! Layers, outermost first:
//! - `api`: axum handlers, request validation and error responses
//! - `service`: business rules (not-found mapping, description checks)
//! - `repository`: id translation and document/domain conversion
//! - `store`: the document collection seam (MongoDB or in-memory)

pub mod api;
pub mod config;
pub mod db;
pub mod repository;
pub mod service;
pub mod store;
