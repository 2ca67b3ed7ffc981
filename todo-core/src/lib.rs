//! Todo Core
//!
//! Core types shared by the todo service, its HTTP client and the CLI.
//!
//! This crate contains:
//! - Domain types: the `Todo` entity as it crosses the API boundary
//! - DTOs: request bodies accepted by the API

pub mod domain;
pub mod dto;
