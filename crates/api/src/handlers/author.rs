//! Handlers for the `/authors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use byline_core::error::CoreError;
use byline_core::types::DbId;
use byline_db::models::author::{Author, CreateAuthor, UpdateAuthor};
use byline_db::models::post::Post;
use byline_db::repositories::{AuthorRepo, PostRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::{optional_field, required_field};
use crate::state::AppState;

/// Response body for a successful author deletion.
#[derive(Debug, Serialize)]
pub struct DeletedAuthor {
    pub message: &'static str,
    pub author: Author,
}

/// POST /authors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let name = required_field(input.name.as_deref(), "name")?;
    let email = required_field(input.email.as_deref(), "email")?;

    let author = AuthorRepo::create(&state.pool, name, email).await?;
    tracing::info!(author_id = author.id, "Author created");
    Ok((StatusCode::CREATED, Json(author)))
}

/// GET /authors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = AuthorRepo::list(&state.pool).await?;
    Ok(Json(authors))
}

/// GET /authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Author>> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;
    Ok(Json(author))
}

/// PUT /authors/{id}
///
/// Applies only the supplied fields; omitted fields keep their stored
/// value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    let input = UpdateAuthor {
        name: optional_field(input.name, "name")?,
        email: optional_field(input.email, "email")?,
    };

    let author = AuthorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;
    tracing::info!(author_id = author.id, "Author updated");
    Ok(Json(author))
}

/// DELETE /authors/{id}
///
/// The store's cascade rule removes the author's posts in the same
/// statement; the response carries the author's last-known state.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedAuthor>> {
    let author = AuthorRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;
    tracing::info!(author_id = author.id, "Author deleted");
    Ok(Json(DeletedAuthor {
        message: "Author deleted successfully",
        author,
    }))
}

/// GET /authors/{id}/posts
///
/// The author must exist (404 otherwise); an author with no posts yields
/// an empty array.
pub async fn list_posts(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Post>>> {
    AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;

    let posts = PostRepo::list_by_author(&state.pool, id).await?;
    Ok(Json(posts))
}
