use crate::types::DbId;

/// Domain error taxonomy shared by the repository and API layers.
///
/// Each variant corresponds to exactly one HTTP status at the API
/// boundary; the mapping lives in `byline-api`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target row does not exist (404).
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Required input is missing or malformed (400).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A unique constraint was violated (400).
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A referenced entity is absent at creation time (400).
    ///
    /// Distinct from [`CoreError::NotFound`]: the request target is fine,
    /// the body points at a row that does not exist.
    #[error("Unknown reference: {entity} with id {id}")]
    UnknownReference { entity: &'static str, id: DbId },

    /// Any unanticipated failure (500).
    #[error("Internal error: {0}")]
    Internal(String),
}
