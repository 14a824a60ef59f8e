//! Integration tests for author CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create and duplicate-email rejection
//! - List ordering and ID lookups
//! - Partial update merge semantics
//! - Delete returning the removed row, with cascade to posts

use assert_matches::assert_matches;
use byline_db::models::author::UpdateAuthor;
use byline_db::repositories::{AuthorRepo, PostRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_author(pool: PgPool) {
    let author = AuthorRepo::create(&pool, "Jane Doe", "jane@example.com")
        .await
        .unwrap();

    assert!(author.id > 0);
    assert_eq!(author.name, "Jane Doe");
    assert_eq!(author.email, "jane@example.com");
}

// ---------------------------------------------------------------------------
// Test: Unique constraint violation on duplicate email
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    AuthorRepo::create(&pool, "Jane Doe", "jane@example.com")
        .await
        .unwrap();

    let err = AuthorRepo::create(&pool, "Other Jane", "jane@example.com")
        .await
        .unwrap_err();
    assert_matches!(
        &err,
        sqlx::Error::Database(db) if db.constraint() == Some("uq_authors_email")
    );
}

// ---------------------------------------------------------------------------
// Test: List ordered by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_ordered_by_id(pool: PgPool) {
    let a = AuthorRepo::create(&pool, "A", "a@example.com").await.unwrap();
    let b = AuthorRepo::create(&pool, "B", "b@example.com").await.unwrap();
    let c = AuthorRepo::create(&pool, "C", "c@example.com").await.unwrap();

    let authors = AuthorRepo::list(&pool).await.unwrap();
    assert_eq!(authors.len(), 3);
    assert_eq!(authors[0].id, a.id);
    assert_eq!(authors[1].id, b.id);
    assert_eq!(authors[2].id, c.id);
}

// ---------------------------------------------------------------------------
// Test: Find by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id(pool: PgPool) {
    let author = AuthorRepo::create(&pool, "Jane Doe", "jane@example.com")
        .await
        .unwrap();

    let found = AuthorRepo::find_by_id(&pool, author.id)
        .await
        .unwrap()
        .expect("Author should exist");
    assert_eq!(found.email, "jane@example.com");

    let missing = AuthorRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: Update merges missing fields from the stored row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_merges_missing_fields(pool: PgPool) {
    let author = AuthorRepo::create(&pool, "Jane Doe", "jane@example.com")
        .await
        .unwrap();

    // Only the name is supplied; the email must survive untouched.
    let updated = AuthorRepo::update(
        &pool,
        author.id,
        &UpdateAuthor {
            name: Some("Jane Smith".to_string()),
            email: None,
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.name, "Jane Smith");
    assert_eq!(updated.email, "jane@example.com");
    assert_eq!(updated.created_at, author.created_at);

    // Now only the email; the new name must survive.
    let updated = AuthorRepo::update(
        &pool,
        author.id,
        &UpdateAuthor {
            name: None,
            email: Some("jane.smith@example.com".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.name, "Jane Smith");
    assert_eq!(updated.email, "jane.smith@example.com");
}

// ---------------------------------------------------------------------------
// Test: Update non-existent returns None
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = AuthorRepo::update(
        &pool,
        999_999,
        &UpdateAuthor {
            name: Some("Ghost".to_string()),
            email: None,
        },
    )
    .await
    .unwrap();

    assert!(
        result.is_none(),
        "Updating non-existent ID should return None"
    );
}

// ---------------------------------------------------------------------------
// Test: Update to an email already taken by another author
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_to_taken_email_rejected(pool: PgPool) {
    AuthorRepo::create(&pool, "Jane Doe", "jane@example.com")
        .await
        .unwrap();
    let other = AuthorRepo::create(&pool, "John Doe", "john@example.com")
        .await
        .unwrap();

    let err = AuthorRepo::update(
        &pool,
        other.id,
        &UpdateAuthor {
            name: None,
            email: Some("jane@example.com".to_string()),
        },
    )
    .await
    .unwrap_err();
    assert_matches!(
        &err,
        sqlx::Error::Database(db) if db.constraint() == Some("uq_authors_email")
    );
}

// ---------------------------------------------------------------------------
// Test: Delete returns the removed row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_returns_row(pool: PgPool) {
    let author = AuthorRepo::create(&pool, "Jane Doe", "jane@example.com")
        .await
        .unwrap();

    let deleted = AuthorRepo::delete(&pool, author.id)
        .await
        .unwrap()
        .expect("Delete should return the row");
    assert_eq!(deleted.id, author.id);
    assert_eq!(deleted.email, "jane@example.com");

    assert!(AuthorRepo::find_by_id(&pool, author.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Delete non-existent returns None
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_returns_none(pool: PgPool) {
    let result = AuthorRepo::delete(&pool, 999_999).await.unwrap();
    assert!(
        result.is_none(),
        "Deleting non-existent ID should return None"
    );
}

// ---------------------------------------------------------------------------
// Test: Deleting an author cascades to their posts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_cascades_to_posts(pool: PgPool) {
    let author = AuthorRepo::create(&pool, "Jane Doe", "jane@example.com")
        .await
        .unwrap();
    let keeper = AuthorRepo::create(&pool, "John Doe", "john@example.com")
        .await
        .unwrap();

    let doomed = PostRepo::create(&pool, "First", "Body", author.id)
        .await
        .unwrap();
    let survivor = PostRepo::create(&pool, "Kept", "Body", keeper.id)
        .await
        .unwrap();

    AuthorRepo::delete(&pool, author.id)
        .await
        .unwrap()
        .expect("Delete should return the row");

    // The author's post is gone; the other author's post is untouched.
    assert!(PostRepo::find_by_id(&pool, doomed.id)
        .await
        .unwrap()
        .is_none());
    assert!(PostRepo::find_by_id(&pool, survivor.id)
        .await
        .unwrap()
        .is_some());
}
