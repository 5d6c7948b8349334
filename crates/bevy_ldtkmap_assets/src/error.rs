//! Error types for project parsing and entity field extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned while reading or decoding an LDtk project.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The selected project source could not be read.
    #[error("Failed to read LDtk project from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error raised by the asset reader.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The top-level document did not match the project schema.
    #[error("Failed to parse LDtk project: {0}")]
    Format(#[from] serde_json::Error),

    /// No level with the given identifier is cached.
    #[error("Level '{0}' not found")]
    LevelNotFound(String),
}

/// Error returned by the typed field accessors on `EntityInstance`.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The entity has no field with this identifier.
    #[error("Field '{0}' not found")]
    NotFound(String),

    /// The field exists but its value does not decode into the requested type.
    #[error("Field '{name}' has an unexpected value: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FieldError {
    /// Whether this is the "field missing" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FieldError::NotFound(_))
    }
}
