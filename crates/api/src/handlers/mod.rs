//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `realtrust_db` and
//! map errors via [`crate::error::AppError`].

pub mod client;
pub mod contact;
pub mod contact_form;
pub mod project;
pub mod subscriber;
