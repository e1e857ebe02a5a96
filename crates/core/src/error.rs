use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The backing store rejected or could not execute a query.
    #[error("Store failure: {0}")]
    Store(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
