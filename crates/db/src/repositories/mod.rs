//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod author_repo;
pub mod post_repo;

pub use author_repo::AuthorRepo;
pub use post_repo::PostRepo;
