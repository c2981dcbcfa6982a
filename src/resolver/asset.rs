//! Named build outputs listed in a resolved config.

use super::platform::{DebianConfig, LinuxPackageLayout, RedHatConfig};
use std::path::PathBuf;

/// One expected build artifact.
///
/// `name` is the bare filename; `path` is where the packager writes it.
/// Linux assets additionally carry the package record their builder reads,
/// serialized under `linux_config`, `debian_config` or `redhat_config`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Asset {
    /// Filename.
    pub name: String,
    /// Destination path.
    pub path: PathBuf,
    /// Package record for Linux builders.
    #[serde(flatten)]
    pub config: Option<AssetConfig>,
}

impl Asset {
    /// Asset with no package record.
    pub fn new(name: impl Into<String>, dir: &std::path::Path) -> Self {
        let name = name.into();
        let path = dir.join(&name);
        Self {
            name,
            path,
            config: None,
        }
    }

    /// Attaches a package record.
    pub fn with_config(mut self, config: AssetConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Package record attached to a Linux asset.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub enum AssetConfig {
    /// Tarball of the packaged app directory.
    #[serde(rename = "linux_config")]
    Tarball(LinuxPackageLayout),
    /// `.deb` package.
    #[serde(rename = "debian_config")]
    Debian(DebianConfig),
    /// `.rpm` package.
    #[serde(rename = "redhat_config")]
    RedHat(RedHatConfig),
}
