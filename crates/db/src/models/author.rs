//! Author entity model and DTOs.

use byline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new author.
///
/// Both fields are required; they are `Option` here so that an absent
/// field reaches handler validation (400) instead of being rejected
/// during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// DTO for updating an existing author. Omitted fields keep their
/// stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}
