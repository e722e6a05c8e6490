//! Error types for schema loading operations.

use cdm_model::{EntityKind, ModelError};
use thiserror::Error;

/// Errors that can occur when building CDM schemas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Failed to read or parse embedded CSV data.
    #[error("Failed to parse CSV {file}: {message}")]
    CsvParse { file: String, message: String },

    /// Type column holds an unrecognised type name.
    #[error("Unknown field type '{type_name}' for {field} in {file}")]
    UnknownFieldType {
        file: String,
        field: String,
        type_name: String,
    },

    /// A menu field declared no options.
    #[error("Menu field {path} of {entity} declares no options")]
    EmptyMenu { entity: EntityKind, path: String },

    /// Swap basket size must be a positive integer.
    #[error("Gauge basket size must be a positive integer, got {0}")]
    InvalidBasketSize(usize),

    /// Two fields of one entity share a flat key.
    #[error("Duplicate flat key '{key}' in {entity} schema")]
    DuplicateFlatKey { entity: EntityKind, key: String },

    /// Schema tree construction failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for schema loading operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
