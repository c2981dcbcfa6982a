//! Crate-level error types.
//!
//! Resolution errors come from [`crate::resolver::Error`]; this module wraps
//! them together with the I/O and parsing failures of the manifest loader
//! and CLI.

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for manifest loading, resolution and CLI execution
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Resolution errors
    #[error(transparent)]
    Resolve(#[from] crate::resolver::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Errors carrying added context
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Requested output field does not exist in the resolved config
    #[error("Unknown field: {field}")]
    UnknownField {
        /// Field name
        field: String,
    },
}

impl ReleaseError {
    /// Returns the resolver error behind this error, if any.
    pub fn as_resolve_error(&self) -> Option<&crate::resolver::Error> {
        match self {
            Self::Resolve(e) => Some(e),
            _ => None,
        }
    }
}
