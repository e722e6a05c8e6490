//! Error types for mapping operations.

use cdm_model::ModelError;
use thiserror::Error;

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MappingError {
    /// Record, section or flat input is not a mapping.
    #[error("Expected a mapping at '{path}', found {found}")]
    InvalidShape { path: String, found: &'static str },

    /// No entity kind matches the record's root key.
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// Other schema model failure.
    #[error(transparent)]
    Model(ModelError),
}

impl From<ModelError> for MappingError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::NotAMapping { path, found } => Self::InvalidShape { path, found },
            ModelError::UnknownEntity(name) => Self::UnknownEntity(name),
            other => Self::Model(other),
        }
    }
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
