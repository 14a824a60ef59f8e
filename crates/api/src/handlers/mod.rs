//! Request handlers for the authors/posts API.
//!
//! Each submodule provides async handler functions (create, list,
//! get_by_id, update, delete) for a single entity type. Handlers
//! validate input, delegate to the corresponding repository in
//! `byline_db`, and map outcomes to HTTP via [`AppError`].

use byline_core::error::CoreError;

use crate::error::AppError;

pub mod author;
pub mod post;

/// Extract a required string field, trimmed.
///
/// Absent, null, and blank values all fail validation, matching the
/// "required non-empty" contract of the create endpoints.
fn required_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        )))),
    }
}

/// Validate an optional update field, trimmed.
///
/// Absent fields pass through as `None` (the stored value is kept);
/// supplied-but-blank values are rejected rather than written.
fn optional_field(value: Option<String>, field: &str) -> Result<Option<String>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Err(AppError::Core(CoreError::Validation(format!(
                    "{field} must not be empty"
                ))))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
    }
}
