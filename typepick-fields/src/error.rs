//! Error types for the selector field

use std::path::PathBuf;
use thiserror::Error;

/// Result type for selector field operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors raised at the edges of the selector field.
///
/// Normalizing, rendering and parsing never fail; only loading an item
/// registry from disk and parsing a variant name can.
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Variant name or code not recognized
    #[error("unknown selector variant: {value}")]
    UnknownVariant { value: String },

    /// Two registry entries share an id
    #[error("duplicate item id in registry: {id}")]
    DuplicateItem { id: String },

    /// Registry file not found
    #[error("registry file not found: {path}")]
    RegistryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
