pub mod author;
pub mod health;
pub mod post;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /authors                list, create
/// /authors/{id}           get, update, delete
/// /authors/{id}/posts     posts by author
///
/// /posts                  list (optional ?author_id= filter), create
/// /posts/{id}             get, update, delete
/// ```
///
/// The banner and health check are mounted separately by
/// [`health::router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/authors", author::router())
        .nest("/posts", post::router())
}
