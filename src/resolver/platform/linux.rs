//! Linux branch: tarball, Debian and RedHat packages.

use super::{BranchContext, PlatformConfig, PlatformFields};
use crate::resolver::asset::{Asset, AssetConfig};
use crate::resolver::error::Result;
use crate::resolver::naming;
use std::path::PathBuf;

/// Layout shared by every Linux package.
///
/// Mirrors what the `.deb`/`.rpm` builders expect: the binary to launch, the
/// packaged app directory to take files from, where to write the package,
/// and the desktop icon.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct LinuxPackageLayout {
    /// Executable inside `src`: the capitalized product name (`Hadron`).
    pub bin: String,
    /// Directory packages are written to (`{cwd}/dist`).
    pub dest: PathBuf,
    /// Desktop icon (`{cwd}/resources/linux/Icon.png`).
    pub icon: PathBuf,
    /// Package name (`hadron-app`).
    pub name: String,
    /// Packaged app directory (`{cwd}/dist/Hadron-linux-x64`).
    pub src: PathBuf,
}

/// Debian package (.deb) options.
///
/// `arch` uses Debian naming (`amd64`, `armhf`, ...).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct DebianConfig {
    /// Shared layout.
    #[serde(flatten)]
    pub layout: LinuxPackageLayout,
    /// Debian architecture.
    pub arch: String,
    /// Control file section.
    pub section: String,
    /// Dependencies in Debian syntax.
    pub depends: Vec<String>,
    /// Suggested packages.
    pub suggests: Vec<String>,
    /// Package version.
    pub version: String,
}

/// RPM package (.rpm) options.
///
/// `arch` uses RPM naming (`x86_64`, `aarch64`, ...).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct RedHatConfig {
    /// Shared layout.
    #[serde(flatten)]
    pub layout: LinuxPackageLayout,
    /// RPM architecture.
    pub arch: String,
    /// Desktop entry categories.
    pub categories: Vec<String>,
    /// Requirements in RPM syntax.
    pub requires: Vec<String>,
    /// Release number appended to the version.
    pub revision: String,
    /// Package version.
    pub version: String,
}

/// Linux asset filenames and package records.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct LinuxFields {
    /// `{slug}-linux-{arch}.tar.gz`
    pub linux_tar_filename: String,
    /// `{slug}_{version}_{debArch}.deb`
    pub linux_deb_filename: String,
    /// `{slug}-{version}-{revision}.{rpmArch}.rpm`
    pub linux_rpm_filename: String,
    /// Options for the `.deb` builder.
    pub debian_config: DebianConfig,
    /// Options for the `.rpm` builder.
    pub redhat_config: RedHatConfig,
}

pub(super) fn build(ctx: BranchContext<'_>) -> Result<PlatformConfig> {
    let identity = ctx.identity;
    let options = ctx.options;
    let version = ctx.input.version.clone();

    let icon = ctx.resources.join("linux").join("Icon.png");
    let packager = ctx.base_packager_options(icon.clone());

    let layout = LinuxPackageLayout {
        bin: naming::capitalize(&identity.product_name),
        dest: ctx.out.clone(),
        icon,
        name: identity.slug.clone(),
        src: ctx.app_path.clone(),
    };

    let debian_config = DebianConfig {
        layout: layout.clone(),
        arch: ctx.arch.deb_arch().to_string(),
        section: options.deb_section.clone(),
        depends: options.deb_depends.clone(),
        suggests: options.deb_suggests.clone(),
        version: version.clone(),
    };

    let redhat_config = RedHatConfig {
        layout: layout.clone(),
        arch: ctx.arch.rpm_arch().to_string(),
        categories: options.rpm_categories.clone(),
        requires: options.rpm_requires.clone(),
        revision: options.rpm_revision.clone(),
        version: version.clone(),
    };

    let fields = LinuxFields {
        linux_tar_filename: format!("{}-linux-{}.tar.gz", identity.slug, ctx.arch),
        linux_deb_filename: format!(
            "{}_{}_{}.deb",
            identity.slug, version, debian_config.arch
        ),
        linux_rpm_filename: format!(
            "{}-{}-{}.{}.rpm",
            identity.slug, version, redhat_config.revision, redhat_config.arch
        ),
        debian_config,
        redhat_config,
    };

    let assets = vec![
        Asset::new(fields.linux_tar_filename.as_str(), &ctx.out)
            .with_config(AssetConfig::Tarball(layout)),
        Asset::new(fields.linux_deb_filename.as_str(), &ctx.out)
            .with_config(AssetConfig::Debian(fields.debian_config.clone())),
        Asset::new(fields.linux_rpm_filename.as_str(), &ctx.out)
            .with_config(AssetConfig::RedHat(fields.redhat_config.clone())),
    ];

    Ok(ctx.finish(packager, None, assets, PlatformFields::Linux(fields)))
}
