//! Deterministic release-configuration resolver for desktop app packaging
//!
//! Given a package name, semantic version, product name and target platform,
//! this library derives everything the packaging tools need:
//! - the release channel (`stable`, `beta`, ...) from the version
//! - channel-qualified product name, slug and bundle id
//! - packager options for macOS, Linux and Windows
//! - Windows installer options
//! - the exact filename of every build asset (.dmg, .tar.gz, .deb, .rpm, .msi, .nupkg, ...)
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod resolver;

// Re-export commonly used types
pub use error::{CliError, ReleaseError, Result};
pub use resolver::{ReleaseConfig, ReleaseInput, ReleaseOptions, resolve, resolve_with};
