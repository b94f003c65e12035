//! Error types for test path resolution.

use thiserror::Error;

/// Reasons a test directory could not be located.
#[derive(Error, Debug)]
pub enum TestPathsError {
    /// Neither a Bazel nor a CMake build was detected.
    #[error("Build environment not recognized")]
    UnknownBuildEnvironment,

    /// A required environment variable is unset or empty.
    #[error("Environment variable {0} is not set")]
    MissingVariable(&'static str),

    /// No project source path was supplied.
    #[error("Project source path is empty")]
    EmptySourcePath,

    /// IO error while creating a directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for test path operations.
pub type TestPathsResult<T> = Result<T, TestPathsError>;
