use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// A record node on the walked path has the wrong shape.
    #[error("expected a mapping at '{path}', found {found}")]
    NotAMapping { path: String, found: &'static str },

    /// Field type name not recognised.
    #[error("unknown field type '{0}'")]
    UnknownFieldType(String),

    /// Entity kind name not recognised.
    #[error("unknown entity kind '{0}'")]
    UnknownEntity(String),

    /// Path does not address a node in the schema.
    #[error("path '{0}' not found in schema")]
    PathNotFound(String),

    /// A section and a field were declared under the same path.
    #[error("conflicting schema node at '{0}'")]
    Conflict(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
