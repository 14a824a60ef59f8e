//! Shared domain types and errors for the Byline service.

pub mod error;
pub mod types;
