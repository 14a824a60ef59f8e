//! Post entity model and DTOs.

use byline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub author_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A post row joined with its author's name and email.
///
/// Produced by the JOIN queries so list/get callers receive author
/// context in one round trip instead of one lookup per post.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostWithAuthor {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub author_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author_name: String,
    pub author_email: String,
}

/// DTO for creating a new post.
///
/// All three fields are required; `Option` for the same reason as
/// [`crate::models::author::CreateAuthor`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<DbId>,
}

/// DTO for updating an existing post. Omitted fields keep their stored
/// value. `author_id` is deliberately absent: posts cannot be reassigned.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
}
