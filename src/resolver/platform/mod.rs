//! Per-platform packager options, installer options and assets.
//!
//! Dispatch is a closed match on [`Platform`]; every arm returns the same
//! [`PlatformConfig`] shape.
//!
//! # Module Organization
//!
//! - `arch` - CPU architecture and its Debian/RPM names
//! - `macos` - app bundle id, disk image and zip assets
//! - `linux` - tarball, `.deb` and `.rpm` assets
//! - `windows` - installer options, version-string metadata and Squirrel assets

mod arch;
mod linux;
mod macos;
mod windows;

pub use arch::Arch;
pub use linux::{DebianConfig, LinuxFields, LinuxPackageLayout, RedHatConfig};
pub use macos::MacOsFields;
pub use windows::{InstallerOptions, VersionString, WindowsFields};

use super::asset::Asset;
use super::channel::parse_version;
use super::error::{Error, Result};
use super::identity::Identity;
use super::input::ReleaseInput;
use super::options::ReleaseOptions;
use semver::Version;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Target platform, in packager naming.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS
    Darwin,
    /// Linux
    Linux,
    /// Windows
    Win32,
}

impl Platform {
    /// Packager name (`darwin`, `linux`, `win32`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Win32 => "win32",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "darwin" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            "win32" => Ok(Self::Win32),
            other => Err(Error::UnsupportedPlatform {
                platform: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options handed to the native-app packager.
///
/// Serialized with the packager's kebab-case keys (`app-bundle-id`,
/// `version-string`, ...). Platform-only keys are omitted elsewhere.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackagerOptions {
    /// Channel-qualified product name.
    pub name: String,
    /// Target platform.
    pub platform: Platform,
    /// Target architecture.
    pub arch: Arch,
    /// Application source directory.
    pub dir: PathBuf,
    /// Packager output directory.
    pub out: PathBuf,
    /// Replace existing output.
    pub overwrite: bool,
    /// Package sources into an asar archive.
    pub asar: bool,
    /// Platform icon.
    pub icon: PathBuf,
    /// Application version.
    pub app_version: String,
    /// macOS only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_bundle_id: Option<String>,
    /// macOS only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_category_type: Option<String>,
    /// Windows only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_string: Option<VersionString>,
}

/// Flat, platform-specific fields merged into the top level of the config.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PlatformFields {
    /// macOS filenames.
    MacOs(MacOsFields),
    /// Linux filenames and package records.
    Linux(LinuxFields),
    /// Windows filenames.
    Windows(WindowsFields),
}

/// Output of one platform branch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    /// Resolved platform.
    pub platform: Platform,
    /// Resolved architecture.
    pub arch: Arch,
    /// Where the packager writes the packaged app.
    pub app_path: PathBuf,
    /// Packager options.
    pub packager_options: PackagerOptions,
    /// Installer builder options (Windows only).
    pub installer_options: Option<InstallerOptions>,
    /// Expected build outputs, in build order.
    pub assets: Vec<Asset>,
    /// Flat per-platform fields.
    pub fields: PlatformFields,
}

/// Everything a platform branch reads.
pub(crate) struct BranchContext<'a> {
    pub identity: &'a Identity,
    pub input: &'a ReleaseInput,
    pub options: &'a ReleaseOptions,
    pub version: Version,
    pub platform: Platform,
    pub arch: Arch,
    pub out: PathBuf,
    pub resources: PathBuf,
    pub app_path: PathBuf,
}

impl BranchContext<'_> {
    /// Packager options shared by every platform.
    pub fn base_packager_options(&self, icon: PathBuf) -> PackagerOptions {
        PackagerOptions {
            name: self.identity.product_name.clone(),
            platform: self.platform,
            arch: self.arch,
            dir: self.options.cwd.clone(),
            out: self.out.clone(),
            overwrite: true,
            asar: true,
            icon,
            app_version: self.input.version.clone(),
            app_bundle_id: None,
            app_category_type: None,
            version_string: None,
        }
    }

    /// Assembles a branch result from its parts.
    pub fn finish(
        self,
        packager_options: PackagerOptions,
        installer_options: Option<InstallerOptions>,
        assets: Vec<Asset>,
        fields: PlatformFields,
    ) -> PlatformConfig {
        log::debug!(
            "Built {} config for {} with {} assets",
            self.platform,
            self.identity.product_name,
            assets.len()
        );

        PlatformConfig {
            platform: self.platform,
            arch: self.arch,
            app_path: self.app_path,
            packager_options,
            installer_options,
            assets,
            fields,
        }
    }
}

/// Resolves the target platform and arch, input first, then options.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPlatform`] or [`Error::UnsupportedArch`].
pub fn resolve_target(input: &ReleaseInput, options: &ReleaseOptions) -> Result<(Platform, Arch)> {
    let platform = input
        .platform
        .as_deref()
        .unwrap_or(options.platform.as_str())
        .parse::<Platform>()?;
    let arch = input
        .arch
        .as_deref()
        .unwrap_or(options.arch.as_str())
        .parse::<Arch>()?;
    Ok((platform, arch))
}

/// Builds the packager options, installer options and assets for the
/// input's platform.
///
/// # Errors
///
/// - [`Error::UnsupportedPlatform`] / [`Error::UnsupportedArch`] for unknown targets
/// - [`Error::InvalidVersion`] for malformed versions
/// - [`Error::MissingConfig`] when the selected branch lacks a required field
pub fn build_platform_config(
    identity: &Identity,
    input: &ReleaseInput,
    options: &ReleaseOptions,
) -> Result<PlatformConfig> {
    let (platform, arch) = resolve_target(input, options)?;
    let version = parse_version(&input.version)?;
    let out = options.out_path();

    let packaged_dir = out.join(format!("{}-{}-{}", identity.product_name, platform, arch));
    let app_path = match platform {
        Platform::Darwin => packaged_dir.join(format!("{}.app", identity.product_name)),
        Platform::Linux | Platform::Win32 => packaged_dir,
    };

    let ctx = BranchContext {
        identity,
        input,
        options,
        version,
        platform,
        arch,
        out,
        resources: options.resources_path(),
        app_path,
    };

    match platform {
        Platform::Darwin => macos::build(ctx),
        Platform::Linux => linux::build(ctx),
        Platform::Win32 => windows::build(ctx),
    }
}
