//! Final release configuration and its assembly.

use super::asset::Asset;
use super::channel::Channel;
use super::identity::Identity;
use super::input::ReleaseInput;
use super::options::ReleaseOptions;
use super::platform::{
    Arch, InstallerOptions, LinuxFields, MacOsFields, PackagerOptions, Platform, PlatformConfig,
    PlatformFields, WindowsFields,
};
use std::path::{Path, PathBuf};

/// Fully resolved release configuration.
///
/// Immutable once built. Serializes to the flat mapping the packaging and
/// installer tools read; fields for other platforms are absent rather than
/// `null`.
///
/// # Examples
///
/// ```
/// use hadron_release_config::resolver::{ReleaseInput, ReleaseOptions, resolve_with};
///
/// # fn example() -> hadron_release_config::resolver::Result<()> {
/// let input = ReleaseInput::builder()
///     .name("hadron-app")
///     .version("1.2.0-beta.1")
///     .product_name("Hadron")
///     .platform("win32")
///     .arch("x64")
///     .author("MongoDB Inc")
///     .build()?;
///
/// let config = resolve_with(ReleaseOptions::with_cwd("/src/hadron-app"), &input)?;
/// assert_eq!(config.product_name(), "Hadron Beta");
/// assert_eq!(config.windows().unwrap().windows_msi_filename, "Hadron BetaSetup.msi");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ReleaseConfig {
    name: String,
    version: String,
    channel: Channel,
    #[serde(rename = "productName")]
    product_name: String,
    slug: String,
    #[serde(rename = "bundleId", skip_serializing_if = "Option::is_none")]
    bundle_id: Option<String>,
    platform: Platform,
    arch: Arch,
    description: String,
    authors: Vec<String>,
    dir: PathBuf,
    out: PathBuf,
    #[serde(rename = "appPath")]
    app_path: PathBuf,
    #[serde(rename = "packagerOptions")]
    packager_options: PackagerOptions,
    #[serde(rename = "installerOptions", skip_serializing_if = "Option::is_none")]
    installer_options: Option<InstallerOptions>,
    assets: Vec<Asset>,
    #[serde(flatten)]
    fields: PlatformFields,
}

impl ReleaseConfig {
    /// Package identifier as supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version string as supplied.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Detected release channel.
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Channel-qualified product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Channel-qualified slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Channel-qualified bundle id, when one was supplied.
    pub fn bundle_id(&self) -> Option<&str> {
        self.bundle_id.as_deref()
    }

    /// Target platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Target architecture.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Product description; the product name when none was supplied.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Authors split from the input author string.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Application directory every path is rooted at.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Packager output directory.
    pub fn out(&self) -> &Path {
        &self.out
    }

    /// Packaged application path.
    pub fn app_path(&self) -> &Path {
        &self.app_path
    }

    /// Options for the native-app packager.
    pub fn packager_options(&self) -> &PackagerOptions {
        &self.packager_options
    }

    /// Options for the Windows installer builder.
    pub fn installer_options(&self) -> Option<&InstallerOptions> {
        self.installer_options.as_ref()
    }

    /// Expected build outputs, in build order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Asset filenames, in build order.
    pub fn asset_names(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(|asset| asset.name.as_str())
    }

    /// Flat per-platform fields.
    pub fn platform_fields(&self) -> &PlatformFields {
        &self.fields
    }

    /// macOS fields, if this is a macOS config.
    pub fn macos(&self) -> Option<&MacOsFields> {
        match &self.fields {
            PlatformFields::MacOs(fields) => Some(fields),
            _ => None,
        }
    }

    /// Linux fields, if this is a Linux config.
    pub fn linux(&self) -> Option<&LinuxFields> {
        match &self.fields {
            PlatformFields::Linux(fields) => Some(fields),
            _ => None,
        }
    }

    /// Windows fields, if this is a Windows config.
    pub fn windows(&self) -> Option<&WindowsFields> {
        match &self.fields {
            PlatformFields::Windows(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Merges the resolved pieces into one [`ReleaseConfig`].
///
/// `options` must already have the caller's overrides applied.
pub fn assemble(
    input: &ReleaseInput,
    channel: Channel,
    identity: Identity,
    platform_config: PlatformConfig,
    options: &ReleaseOptions,
) -> ReleaseConfig {
    let description = input
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| identity.product_name.clone());

    ReleaseConfig {
        name: input.name.clone(),
        version: input.version.clone(),
        channel,
        product_name: identity.product_name,
        slug: identity.slug,
        bundle_id: identity.bundle_id,
        platform: platform_config.platform,
        arch: platform_config.arch,
        description,
        authors: input.authors(),
        dir: options.cwd.clone(),
        out: options.out_path(),
        app_path: platform_config.app_path,
        packager_options: platform_config.packager_options,
        installer_options: platform_config.installer_options,
        assets: platform_config.assets,
        fields: platform_config.fields,
    }
}
