//! Error types for release-configuration resolution.
//!
//! Every variant is terminal for the resolve call that produced it: the
//! resolver never returns a partial config.

use thiserror::Error;

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving a release configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Version string is not `MAJOR.MINOR.PATCH[-PRERELEASE]`
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion {
        /// Version as supplied by the caller
        version: String,
        /// Why it was rejected
        reason: String,
    },

    /// A field required by the selected platform branch is absent
    #[error("Missing required config: {field}")]
    MissingConfig {
        /// Name of the missing field
        field: &'static str,
    },

    /// Platform value outside `darwin`, `linux`, `win32`
    #[error("Unsupported platform: {platform}. Valid platforms: darwin, linux, win32")]
    UnsupportedPlatform {
        /// Platform as supplied by the caller
        platform: String,
    },

    /// Architecture value the packagers cannot target
    #[error("Unsupported architecture: {arch}. Valid architectures: x64, ia32, arm64, armv7l")]
    UnsupportedArch {
        /// Architecture as supplied by the caller
        arch: String,
    },

    /// Unknown option key or an option value that failed validation
    #[error("Invalid option '{key}': {reason}")]
    InvalidOption {
        /// Option key
        key: String,
        /// Why it was rejected
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_version(version: &str, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
    }
}
