use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::Validation`] built from a static message.
    pub fn validation(message: &str) -> Self {
        CoreError::Validation(message.to_string())
    }
}
