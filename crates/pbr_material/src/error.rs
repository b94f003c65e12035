//! Error types for material import and persistence.
//!
//! Building and comparing a [`Pbr`](crate::Pbr) never fails; these errors come
//! from reading, parsing, and saving material descriptions.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for material loading and library operations.
#[derive(Error, Debug)]
pub enum MaterialError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed statement in an MTL file.
    #[error("Line {line}: {message}")]
    Parse {
        /// 1-based line number of the statement.
        line: usize,
        /// Error message.
        message: String,
    },

    /// Requested material is not defined in the file.
    #[error("Material '{name}' not found in {path:?}")]
    NotFound {
        /// Name that was requested.
        name: String,
        /// File that was searched.
        path: PathBuf,
    },

    /// Configuration document could not be parsed.
    #[error("Parse error: {0}")]
    Config(String),

    /// Configuration could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// File extension is not a supported configuration format.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;
