//! Channel-suffix formatting, one function per naming convention.
//!
//! Every platform branch builds its names through these functions so that
//! display names, slugs, bundle ids and nupkg versions agree on a channel.

use super::channel::Channel;
use super::error::{Error, Result};
use semver::Version;

/// Uppercases the first character and passes the rest through unchanged.
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"Hadron"` + `beta` → `"Hadron Beta"`
pub fn display_name(base: &str, channel: &Channel) -> String {
    match channel {
        Channel::Stable => base.to_string(),
        Channel::Prerelease(tag) => format!("{} {}", base, capitalize(tag)),
    }
}

/// `"hadron-app"` + `beta` → `"hadron-app-beta"`
pub fn slug(base: &str, channel: &Channel) -> String {
    match channel {
        Channel::Stable => base.to_string(),
        Channel::Prerelease(tag) => format!("{}-{}", base, tag.to_lowercase()),
    }
}

/// `"com.mongodb.hadron"` + `beta` → `"com.mongodb.hadron.beta"`
pub fn bundle_id(base: &str, channel: &Channel) -> String {
    match channel {
        Channel::Stable => base.to_string(),
        Channel::Prerelease(tag) => format!("{}.{}", base, tag.to_lowercase()),
    }
}

/// Display name with all spaces removed (`"Hadron Custom"` → `"HadronCustom"`).
pub fn compact(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Version segment used in Squirrel nupkg filenames.
///
/// Stable versions keep their numeric core. Pre-releases drop the dot before
/// the build number (`1.2.0-custom.5` → `1.2.0-custom5`). Build metadata is
/// not part of the nupkg version.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] when the pre-release has more than two
/// dot-separated identifiers; no transform is defined for those.
pub fn nupkg_version(version: &Version) -> Result<String> {
    let core = format!("{}.{}.{}", version.major, version.minor, version.patch);

    if version.pre.is_empty() {
        return Ok(core);
    }

    let identifiers: Vec<&str> = version.pre.as_str().split('.').collect();
    if identifiers.len() > 2 {
        return Err(Error::invalid_version(
            &version.to_string(),
            format!(
                "pre-release '{}' has {} identifiers; nupkg versions support at most two",
                version.pre,
                identifiers.len()
            ),
        ));
    }

    Ok(format!("{}-{}", core, identifiers.concat()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beta() -> Channel {
        Channel::Prerelease("beta".into())
    }

    #[test]
    fn capitalize_only_touches_first_letter() {
        assert_eq!(capitalize("beta"), "Beta");
        assert_eq!(capitalize("rC2"), "RC2");
        assert_eq!(capitalize("dev-Build"), "Dev-Build");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn stable_names_are_untouched() {
        assert_eq!(display_name("Hadron", &Channel::Stable), "Hadron");
        assert_eq!(slug("hadron-app", &Channel::Stable), "hadron-app");
        assert_eq!(bundle_id("com.mongodb.hadron", &Channel::Stable), "com.mongodb.hadron");
    }

    #[test]
    fn prerelease_names_get_suffixes() {
        assert_eq!(display_name("Hadron", &beta()), "Hadron Beta");
        assert_eq!(slug("hadron-app", &beta()), "hadron-app-beta");
        assert_eq!(bundle_id("com.mongodb.hadron", &beta()), "com.mongodb.hadron.beta");
    }

    #[test]
    fn identifier_suffixes_are_lowercased() {
        let channel = Channel::Prerelease("Nightly".into());
        assert_eq!(display_name("Hadron", &channel), "Hadron Nightly");
        assert_eq!(slug("hadron-app", &channel), "hadron-app-nightly");
        assert_eq!(bundle_id("com.mongodb.hadron", &channel), "com.mongodb.hadron.nightly");
    }

    #[test]
    fn nupkg_version_strips_build_dot() {
        let stable = Version::parse("1.2.0").unwrap();
        assert_eq!(nupkg_version(&stable).unwrap(), "1.2.0");

        let custom = Version::parse("1.2.0-custom.5").unwrap();
        assert_eq!(nupkg_version(&custom).unwrap(), "1.2.0-custom5");

        let bare = Version::parse("1.2.0-beta").unwrap();
        assert_eq!(nupkg_version(&bare).unwrap(), "1.2.0-beta");

        let with_build = Version::parse("1.2.0-beta.1+sha.1").unwrap();
        assert_eq!(nupkg_version(&with_build).unwrap(), "1.2.0-beta1");
    }

    #[test]
    fn nupkg_version_fails_closed_on_deep_prerelease() {
        let deep = Version::parse("1.2.0-custom.5.1").unwrap();
        assert!(matches!(
            nupkg_version(&deep),
            Err(Error::InvalidVersion { .. })
        ));
    }

    #[test]
    fn compact_drops_spaces() {
        assert_eq!(compact("Hadron Custom"), "HadronCustom");
        assert_eq!(compact("Hadron"), "Hadron");
    }
}
