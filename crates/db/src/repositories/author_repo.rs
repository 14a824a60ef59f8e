//! Repository for the `authors` table.

use byline_core::types::DbId;
use sqlx::PgPool;

use crate::models::author::{Author, UpdateAuthor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, created_at";

/// Provides CRUD operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author, returning the created row.
    ///
    /// A duplicate email surfaces as a unique-constraint violation
    /// (`uq_authors_email`) from the store.
    pub async fn create(pool: &PgPool, name: &str, email: &str) -> Result<Author, sqlx::Error> {
        let query =
            format!("INSERT INTO authors (name, email) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Author>(&query)
            .bind(name)
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// List all authors ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY id");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    /// Find an author by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an author. Fields left `None` in `input` keep their stored
    /// value: the current row is fetched, merged in the application, and
    /// written back with a single UPDATE. A new email colliding with
    /// another author surfaces as a unique-constraint violation.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAuthor,
    ) -> Result<Option<Author>, sqlx::Error> {
        let Some(current) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let name = input.name.as_deref().unwrap_or(&current.name);
        let email = input.email.as_deref().unwrap_or(&current.email);

        let query =
            format!("UPDATE authors SET name = $2, email = $3 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(name)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Delete an author by ID, returning the removed row. The author's
    /// posts are removed by the store's cascade rule, not by a second
    /// statement here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("DELETE FROM authors WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
