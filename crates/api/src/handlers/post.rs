//! Handlers for the `/posts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use byline_core::error::CoreError;
use byline_core::types::DbId;
use byline_db::models::post::{CreatePost, Post, PostWithAuthor, UpdatePost};
use byline_db::repositories::{AuthorRepo, PostRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::{optional_field, required_field};
use crate::state::AppState;

/// Query parameters accepted by `GET /posts`.
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    pub author_id: Option<DbId>,
}

/// Response body for a successful post deletion.
#[derive(Debug, Serialize)]
pub struct DeletedPost {
    pub message: &'static str,
    pub post: Post,
}

/// POST /posts
///
/// The referenced author must exist before the insert is attempted; a
/// missing author is a 400 (the request body is wrong), not a 404.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<(StatusCode, Json<Post>)> {
    let title = required_field(input.title.as_deref(), "title")?;
    let content = required_field(input.content.as_deref(), "content")?;
    let author_id = input
        .author_id
        .ok_or_else(|| AppError::Core(CoreError::Validation("author_id is required".into())))?;

    AuthorRepo::find_by_id(&state.pool, author_id)
        .await?
        .ok_or(AppError::Core(CoreError::UnknownReference {
            entity: "Author",
            id: author_id,
        }))?;

    let post = PostRepo::create(&state.pool, title, content, author_id).await?;
    tracing::info!(post_id = post.id, author_id, "Post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts
///
/// Every row carries the owning author's name and email from a single
/// JOIN query. With `?author_id=` the list is filtered to that author;
/// an unknown filter value yields an empty array, not an error.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> AppResult<Json<Vec<PostWithAuthor>>> {
    let posts = PostRepo::list_with_authors(&state.pool, params.author_id).await?;
    Ok(Json(posts))
}

/// GET /posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PostWithAuthor>> {
    let post = PostRepo::find_by_id_with_author(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    Ok(Json(post))
}

/// PUT /posts/{id}
///
/// Applies only the supplied fields (`title`, `content`); the owning
/// author cannot be reassigned.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<Json<Post>> {
    let input = UpdatePost {
        title: optional_field(input.title, "title")?,
        content: optional_field(input.content, "content")?,
    };

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    tracing::info!(post_id = post.id, "Post updated");
    Ok(Json(post))
}

/// DELETE /posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedPost>> {
    let post = PostRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    tracing::info!(post_id = post.id, "Post deleted");
    Ok(Json(DeletedPost {
        message: "Post deleted successfully",
        post,
    }))
}
