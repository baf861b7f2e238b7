//! Domain logic for the Real Trust content backend.
//!
//! Nothing in this crate performs I/O. The database layer (`realtrust-db`)
//! and the HTTP layer (`realtrust-api`) both build on these types.

pub mod contact;
pub mod error;
pub mod fields;
pub mod media;
pub mod types;
