//! Error types for matriz-cli.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Matrix file could not be parsed
    #[error("Invalid matrix file: {0}")]
    InvalidInput(String),

    /// Matrix failed validation
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server startup or runtime failure
    #[error("Server error: {0}")]
    ServerFailed(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound(_) => ExitCode::from(3),
            Self::InvalidInput(_) => ExitCode::from(4),
            Self::ValidationFailed(_) => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(7),
            Self::ServerFailed(_) => ExitCode::from(8),
        }
    }
}

impl From<matriz::error::MatrizError> for CliError {
    fn from(e: matriz::error::MatrizError) -> Self {
        Self::ValidationFailed(e.to_string())
    }
}
