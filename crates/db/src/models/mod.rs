//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO holding already-validated input for inserts

pub mod client;
pub mod contact;
pub mod image;
pub mod project;
pub mod subscriber;
