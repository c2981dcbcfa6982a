//! Release channel detection from semantic versions.

use super::error::{Error, Result};
use semver::Version;
use std::fmt;

const STABLE: &str = "stable";

/// Release track derived from a version's pre-release tag.
///
/// A version without a pre-release segment is always [`Channel::Stable`].
/// Otherwise the channel is the first dot-delimited identifier of the
/// pre-release segment, case preserved (`1.2.0-custom.5` is `custom`).
///
/// # Examples
///
/// ```
/// use hadron_release_config::resolver::{Channel, detect_channel};
///
/// assert_eq!(detect_channel("1.2.0").unwrap(), Channel::Stable);
/// assert_eq!(detect_channel("1.2.0-beta.1").unwrap().as_str(), "beta");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(into = "String")]
pub enum Channel {
    /// No pre-release tag.
    #[default]
    Stable,
    /// Pre-release identifier taken verbatim (`beta`, `custom`, ...).
    Prerelease(String),
}

impl Channel {
    /// Returns true for the stable channel.
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }

    /// Returns the channel token as it appeared in the version.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Stable => STABLE,
            Self::Prerelease(tag) => tag,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Channel> for String {
    fn from(channel: Channel) -> Self {
        channel.as_str().to_string()
    }
}

/// Parses a release version.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] unless the numeric core is three
/// dot-separated non-negative integers followed by an optional well-formed
/// pre-release and build segment.
pub fn parse_version(version: &str) -> Result<Version> {
    Version::parse(version).map_err(|e| Error::invalid_version(version, e.to_string()))
}

/// Detects the release channel of `version`.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] for malformed versions.
pub fn detect_channel(version: &str) -> Result<Channel> {
    let parsed = parse_version(version)?;
    Ok(channel_of(&parsed))
}

/// Channel of an already parsed version.
pub fn channel_of(version: &Version) -> Channel {
    if version.pre.is_empty() {
        return Channel::Stable;
    }

    // Pre-release is non-empty, so split always yields a first token
    let tag = version.pre.as_str().split('.').next().unwrap_or_default();

    if tag == STABLE {
        Channel::Stable
    } else {
        log::debug!("Detected release channel '{}' from {}", tag, version);
        Channel::Prerelease(tag.to_string())
    }
}
