//! CPU architecture types and packager name mappings.

use crate::resolver::error::Error;
use std::fmt;
use std::str::FromStr;

/// CPU architecture for packaged applications.
///
/// Uses the packager's naming (`x64`, `ia32`, ...). Debian and RPM have their
/// own names for the same architectures, see [`Arch::deb_arch`] and
/// [`Arch::rpm_arch`].
///
/// # Examples
///
/// ```
/// use hadron_release_config::resolver::Arch;
///
/// let arch: Arch = "x64".parse().unwrap();
/// assert_eq!(arch.deb_arch(), "amd64");
/// assert_eq!(arch.rpm_arch(), "x86_64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X64,
    /// x86 / i686 (32-bit)
    Ia32,
    /// AArch64 / ARM64 (64-bit)
    Arm64,
    /// ARMv7 with hard-float (32-bit)
    Armv7l,
}

impl Arch {
    /// Architecture of the running host, if the packagers support it.
    pub fn host() -> Option<Self> {
        match std::env::consts::ARCH {
            "x86_64" => Some(Self::X64),
            "x86" => Some(Self::Ia32),
            "aarch64" => Some(Self::Arm64),
            "arm" => Some(Self::Armv7l),
            _ => None,
        }
    }

    /// Packager name (`x64`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::Ia32 => "ia32",
            Self::Arm64 => "arm64",
            Self::Armv7l => "armv7l",
        }
    }

    /// Debian control file architecture (`amd64`).
    pub fn deb_arch(&self) -> &'static str {
        match self {
            Self::X64 => "amd64",
            Self::Ia32 => "i386",
            Self::Arm64 => "arm64",
            Self::Armv7l => "armhf",
        }
    }

    /// RPM spec architecture (`x86_64`).
    pub fn rpm_arch(&self) -> &'static str {
        match self {
            Self::X64 => "x86_64",
            Self::Ia32 => "i386",
            Self::Arm64 => "aarch64",
            Self::Armv7l => "armv7hl",
        }
    }
}

impl FromStr for Arch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x64" | "x86_64" | "amd64" => Ok(Self::X64),
            "ia32" | "x86" | "i386" | "i686" => Ok(Self::Ia32),
            "arm64" | "aarch64" => Ok(Self::Arm64),
            "armv7l" | "armhf" => Ok(Self::Armv7l),
            other => Err(Error::UnsupportedArch {
                arch: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
