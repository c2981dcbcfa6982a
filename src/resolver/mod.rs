//! Release-configuration resolver.
//!
//! Turns a [`ReleaseInput`] into a [`ReleaseConfig`]: the release channel,
//! channel-qualified names, packager and installer options, and the exact
//! filename of every build asset for the target platform.
//!
//! Resolution is a pure function of its input. Nothing here touches the
//! filesystem; emitted paths are rooted at [`ReleaseOptions::cwd`].
//!
//! # Pipeline
//!
//! 1. [`ReleaseOptions`] defaults, with [`OptionOverrides`] applied
//! 2. [`detect_channel`] from the version
//! 3. [`derive_identity`] from the base names and channel
//! 4. [`build_platform_config`] for the target platform
//! 5. [`assemble`] into the final config
//!
//! # Example
//!
//! ```
//! use hadron_release_config::resolver::{ReleaseInput, ReleaseOptions, resolve_with};
//!
//! # fn example() -> hadron_release_config::resolver::Result<()> {
//! let input = ReleaseInput::builder()
//!     .name("hadron-app")
//!     .version("1.2.0")
//!     .product_name("Hadron")
//!     .platform("linux")
//!     .arch("x64")
//!     .build()?;
//!
//! let config = resolve_with(ReleaseOptions::with_cwd("/src/hadron-app"), &input)?;
//! let linux = config.linux().unwrap();
//! assert_eq!(linux.debian_config.arch, "amd64");
//! assert_eq!(linux.redhat_config.arch, "x86_64");
//! # Ok(())
//! # }
//! ```

mod assembler;
mod asset;
mod channel;
mod error;
mod identity;
mod input;
pub mod naming;
mod options;
pub mod platform;

pub use assembler::{ReleaseConfig, assemble};
pub use asset::{Asset, AssetConfig};
pub use channel::{Channel, channel_of, detect_channel, parse_version};
pub use error::{Error, Result};
pub use identity::{BaseIdentity, Identity, derive_identity};
pub use input::{ReleaseInput, ReleaseInputBuilder};
pub use options::{OPTIONS, OptionOverrides, OptionSpec, ReleaseOptions, is_overridable};
pub use platform::{Arch, PackagerOptions, Platform, PlatformConfig, build_platform_config};

/// Resolves `input` against the ambient defaults with `overrides` applied.
///
/// # Errors
///
/// See [`resolve_with`].
pub fn resolve(input: &ReleaseInput, overrides: OptionOverrides) -> Result<ReleaseConfig> {
    let options = ReleaseOptions::from_env().apply(overrides)?;
    resolve_with(options, input)
}

/// Resolves `input` against an explicit option set.
///
/// # Errors
///
/// - [`Error::InvalidVersion`] for malformed versions
/// - [`Error::UnsupportedPlatform`] / [`Error::UnsupportedArch`] for unknown targets
/// - [`Error::MissingConfig`] when the platform branch lacks a required field
pub fn resolve_with(options: ReleaseOptions, input: &ReleaseInput) -> Result<ReleaseConfig> {
    let channel = detect_channel(&input.version)?;

    let base = BaseIdentity {
        product_name: input.product_name.clone(),
        slug: input.name.clone(),
        bundle_id: input.app_bundle_id.clone(),
    };
    let identity = derive_identity(&base, &channel);

    let platform_config = build_platform_config(&identity, input, &options)?;

    Ok(assemble(input, channel, identity, platform_config, &options))
}
