//! Repository for the `posts` table.

use byline_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{Post, PostWithAuthor, UpdatePost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, author_id, created_at, updated_at";

/// Aliased column list for JOIN queries (`posts p`, `authors a`).
const JOINED_COLUMNS: &str = "p.id, p.title, p.content, p.author_id, p.created_at, \
    p.updated_at, a.name AS author_name, a.email AS author_email";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// Callers check author existence first; if the author disappears
    /// between that check and this insert, the store's foreign key
    /// rejects the row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        content: &str,
        author_id: DbId,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, content, author_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(title)
            .bind(content)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// List posts with the owning author's name and email joined in,
    /// ordered by id ascending. One query regardless of result size.
    ///
    /// When `author_id` is given only that author's posts are returned;
    /// an unknown value simply yields an empty set.
    pub async fn list_with_authors(
        pool: &PgPool,
        author_id: Option<DbId>,
    ) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
        match author_id {
            Some(author_id) => {
                let query = format!(
                    "SELECT {JOINED_COLUMNS}
                     FROM posts p
                     JOIN authors a ON a.id = p.author_id
                     WHERE p.author_id = $1
                     ORDER BY p.id"
                );
                sqlx::query_as::<_, PostWithAuthor>(&query)
                    .bind(author_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {JOINED_COLUMNS}
                     FROM posts p
                     JOIN authors a ON a.id = p.author_id
                     ORDER BY p.id"
                );
                sqlx::query_as::<_, PostWithAuthor>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Find a post by ID with the owning author's name and email joined in.
    pub async fn find_by_id_with_author(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PostWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM posts p
             JOIN authors a ON a.id = p.author_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PostWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one author's posts ordered by id ascending (plain rows, no
    /// author columns).
    pub async fn list_by_author(pool: &PgPool, author_id: DbId) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE author_id = $1 ORDER BY id");
        sqlx::query_as::<_, Post>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// Find a post by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a post's title and/or content. Fields left `None` keep
    /// their stored value via the same fetch-and-merge as
    /// [`AuthorRepo::update`](crate::repositories::AuthorRepo::update).
    /// `updated_at` is always refreshed. The owning author cannot change.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let Some(current) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let title = input.title.as_deref().unwrap_or(&current.title);
        let content = input.content.as_deref().unwrap_or(&current.content);

        let query = format!(
            "UPDATE posts SET title = $2, content = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(title)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID, returning the removed row. No cascade side
    /// effects.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("DELETE FROM posts WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
