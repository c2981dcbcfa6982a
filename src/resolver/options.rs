//! Documented default options and caller overrides.
//!
//! Resolution starts from [`ReleaseOptions`], applies an [`OptionOverrides`]
//! on top (override wins), and only then derives the platform config.

use super::error::{Error, Result};
use std::path::PathBuf;

/// A recognized option with its documented default.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OptionSpec {
    /// Option key as accepted in manifests and `--set`.
    pub key: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Default value, rendered for display.
    pub default: &'static str,
}

/// Every option the resolver recognizes.
///
/// `platform` and `arch` are listed for documentation; callers set them
/// through the release input rather than overrides.
pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        key: "cwd",
        description: "Application directory used as the base for every emitted path",
        default: "<current directory>",
    },
    OptionSpec {
        key: "platform",
        description: "Target platform: darwin, linux or win32",
        default: "<host platform>",
    },
    OptionSpec {
        key: "arch",
        description: "Target architecture: x64, ia32, arm64 or armv7l",
        default: "<host arch>",
    },
    OptionSpec {
        key: "out_dir",
        description: "Output directory for packaged apps, relative to cwd",
        default: "dist",
    },
    OptionSpec {
        key: "resources_dir",
        description: "Directory holding platform icons and installer images, relative to cwd",
        default: "resources",
    },
    OptionSpec {
        key: "app_category_type",
        description: "macOS LSApplicationCategoryType",
        default: "public.app-category.productivity",
    },
    OptionSpec {
        key: "favicon_url",
        description: "Icon URL shown in Windows Programs and Features",
        default: "<setup icon path>",
    },
    OptionSpec {
        key: "signtool_params",
        description: "Parameters handed to signtool by the Windows installer builder",
        default: "",
    },
    OptionSpec {
        key: "deb_section",
        description: "Debian control file section",
        default: "Databases",
    },
    OptionSpec {
        key: "deb_depends",
        description: "Debian package dependencies",
        default: "[\"python\"]",
    },
    OptionSpec {
        key: "deb_suggests",
        description: "Debian package suggestions",
        default: "[\"libgnome-keyring0\"]",
    },
    OptionSpec {
        key: "rpm_categories",
        description: "freedesktop.org categories for the RPM desktop entry",
        default: "[\"Development\"]",
    },
    OptionSpec {
        key: "rpm_requires",
        description: "RPM package requirements",
        default: "[\"libXScrnSaver(x86-64)\"]",
    },
    OptionSpec {
        key: "rpm_revision",
        description: "RPM release number appended to the version",
        default: "1",
    },
];

/// Resolved option set.
///
/// Construct with [`ReleaseOptions::from_env`] for the ambient defaults or
/// [`ReleaseOptions::with_cwd`] for a fixed application directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseOptions {
    /// Application directory. Every emitted path is rooted here.
    pub cwd: PathBuf,

    /// Target platform used when the input does not name one.
    pub platform: String,

    /// Target architecture used when the input does not name one.
    pub arch: String,

    /// Output directory for packaged apps, relative to `cwd`.
    ///
    /// Default: "dist"
    pub out_dir: String,

    /// Resource directory, relative to `cwd`.
    ///
    /// Default: "resources"
    pub resources_dir: String,

    /// macOS application category.
    ///
    /// Default: "public.app-category.productivity"
    pub app_category_type: String,

    /// Windows Programs and Features icon URL.
    ///
    /// Default: None (the setup icon path is used)
    pub favicon_url: Option<String>,

    /// signtool parameters for the Windows installer builder.
    ///
    /// Default: ""
    pub signtool_params: String,

    /// Debian section.
    ///
    /// Default: "Databases"
    pub deb_section: String,

    /// Debian dependencies.
    ///
    /// Default: `["python"]`
    pub deb_depends: Vec<String>,

    /// Debian suggestions.
    ///
    /// Default: `["libgnome-keyring0"]`
    pub deb_suggests: Vec<String>,

    /// RPM desktop categories.
    ///
    /// Default: `["Development"]`
    pub rpm_categories: Vec<String>,

    /// RPM requirements.
    ///
    /// Default: `["libXScrnSaver(x86-64)"]`
    pub rpm_requires: Vec<String>,

    /// RPM revision.
    ///
    /// Default: "1"
    pub rpm_revision: String,
}

impl ReleaseOptions {
    /// Defaults rooted at `cwd`, targeting the host platform and arch.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            platform: host_platform().to_string(),
            arch: host_arch().to_string(),
            out_dir: "dist".to_string(),
            resources_dir: "resources".to_string(),
            app_category_type: "public.app-category.productivity".to_string(),
            favicon_url: None,
            signtool_params: String::new(),
            deb_section: "Databases".to_string(),
            deb_depends: vec!["python".to_string()],
            deb_suggests: vec!["libgnome-keyring0".to_string()],
            rpm_categories: vec!["Development".to_string()],
            rpm_requires: vec!["libXScrnSaver(x86-64)".to_string()],
            rpm_revision: "1".to_string(),
        }
    }

    /// Defaults rooted at the process working directory.
    pub fn from_env() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_cwd(cwd)
    }

    /// Output directory (`{cwd}/{out_dir}`).
    pub fn out_path(&self) -> PathBuf {
        self.cwd.join(&self.out_dir)
    }

    /// Resource directory (`{cwd}/{resources_dir}`).
    pub fn resources_path(&self) -> PathBuf {
        self.cwd.join(&self.resources_dir)
    }

    /// Applies `overrides` on top of these options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if an overridden value fails
    /// validation. Nothing is applied in that case.
    pub fn apply(mut self, overrides: OptionOverrides) -> Result<Self> {
        overrides.validate()?;

        if let Some(cwd) = overrides.cwd {
            self.cwd = cwd;
        }
        if let Some(out_dir) = overrides.out_dir {
            self.out_dir = out_dir;
        }
        if let Some(resources_dir) = overrides.resources_dir {
            self.resources_dir = resources_dir;
        }
        if let Some(category) = overrides.app_category_type {
            self.app_category_type = category;
        }
        if let Some(url) = overrides.favicon_url {
            self.favicon_url = Some(url);
        }
        if let Some(params) = overrides.signtool_params {
            self.signtool_params = params;
        }
        if let Some(section) = overrides.deb_section {
            self.deb_section = section;
        }
        if let Some(depends) = overrides.deb_depends {
            self.deb_depends = depends;
        }
        if let Some(suggests) = overrides.deb_suggests {
            self.deb_suggests = suggests;
        }
        if let Some(categories) = overrides.rpm_categories {
            self.rpm_categories = categories;
        }
        if let Some(requires) = overrides.rpm_requires {
            self.rpm_requires = requires;
        }
        if let Some(revision) = overrides.rpm_revision {
            self.rpm_revision = revision;
        }

        Ok(self)
    }
}

/// Partial replacement of [`ReleaseOptions`].
///
/// Unknown keys are rejected during deserialization.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionOverrides {
    /// See [`ReleaseOptions::cwd`].
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    /// See [`ReleaseOptions::out_dir`].
    #[serde(default)]
    pub out_dir: Option<String>,
    /// See [`ReleaseOptions::resources_dir`].
    #[serde(default)]
    pub resources_dir: Option<String>,
    /// See [`ReleaseOptions::app_category_type`].
    #[serde(default)]
    pub app_category_type: Option<String>,
    /// See [`ReleaseOptions::favicon_url`].
    #[serde(default)]
    pub favicon_url: Option<String>,
    /// See [`ReleaseOptions::signtool_params`].
    #[serde(default)]
    pub signtool_params: Option<String>,
    /// See [`ReleaseOptions::deb_section`].
    #[serde(default)]
    pub deb_section: Option<String>,
    /// See [`ReleaseOptions::deb_depends`].
    #[serde(default)]
    pub deb_depends: Option<Vec<String>>,
    /// See [`ReleaseOptions::deb_suggests`].
    #[serde(default)]
    pub deb_suggests: Option<Vec<String>>,
    /// See [`ReleaseOptions::rpm_categories`].
    #[serde(default)]
    pub rpm_categories: Option<Vec<String>>,
    /// See [`ReleaseOptions::rpm_requires`].
    #[serde(default)]
    pub rpm_requires: Option<Vec<String>>,
    /// See [`ReleaseOptions::rpm_revision`].
    #[serde(default)]
    pub rpm_revision: Option<String>,
}

impl OptionOverrides {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.favicon_url {
            url::Url::parse(url).map_err(|e| Error::InvalidOption {
                key: "favicon_url".to_string(),
                reason: format!("'{}' is not a valid URL: {}", url, e),
            })?;
        }

        let required = [
            ("out_dir", &self.out_dir),
            ("resources_dir", &self.resources_dir),
            ("rpm_revision", &self.rpm_revision),
        ];
        for (key, value) in required {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(Error::InvalidOption {
                    key: key.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Host platform in packager naming (`darwin`, `linux`, `win32`).
///
/// Unsupported hosts report their raw OS name so resolution fails with a
/// message naming it.
pub fn host_platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

/// Host architecture in packager naming (`x64`, `arm64`, ...).
pub fn host_arch() -> &'static str {
    super::platform::Arch::host()
        .map(|arch| arch.as_str())
        .unwrap_or(std::env::consts::ARCH)
}

/// Returns true if `key` names a documented option that overrides accept.
pub fn is_overridable(key: &str) -> bool {
    key != "platform" && key != "arch" && OPTIONS.iter().any(|spec| spec.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = ReleaseOptions::with_cwd("/app");
        assert_eq!(options.out_dir, "dist");
        assert_eq!(options.deb_section, "Databases");
        assert_eq!(options.deb_depends, ["python"]);
        assert_eq!(options.rpm_requires, ["libXScrnSaver(x86-64)"]);
        assert_eq!(options.rpm_revision, "1");
        assert_eq!(options.out_path(), PathBuf::from("/app/dist"));
    }

    #[test]
    fn overrides_win_on_collision() {
        let overrides = OptionOverrides {
            out_dir: Some("build".into()),
            deb_depends: Some(vec!["python3".into()]),
            ..Default::default()
        };
        let options = ReleaseOptions::with_cwd("/app").apply(overrides).unwrap();
        assert_eq!(options.out_dir, "build");
        assert_eq!(options.deb_depends, ["python3"]);
        assert_eq!(options.deb_section, "Databases");
    }

    #[test]
    fn unknown_override_keys_are_rejected() {
        let value = serde_json::json!({ "out_dir": "build", "bogus": true });
        let err = serde_json::from_value::<OptionOverrides>(value).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn invalid_favicon_url_is_rejected() {
        let overrides = OptionOverrides {
            favicon_url: Some("not a url".into()),
            ..Default::default()
        };
        let err = ReleaseOptions::with_cwd("/app").apply(overrides).unwrap_err();
        assert!(matches!(err, Error::InvalidOption { ref key, .. } if key == "favicon_url"));
    }

    #[test]
    fn empty_revision_is_rejected() {
        let overrides = OptionOverrides {
            rpm_revision: Some(" ".into()),
            ..Default::default()
        };
        assert!(ReleaseOptions::with_cwd("/app").apply(overrides).is_err());
    }

    #[test]
    fn every_override_field_is_documented() {
        for key in [
            "cwd",
            "out_dir",
            "resources_dir",
            "app_category_type",
            "favicon_url",
            "signtool_params",
            "deb_section",
            "deb_depends",
            "deb_suggests",
            "rpm_categories",
            "rpm_requires",
            "rpm_revision",
        ] {
            assert!(is_overridable(key), "{key} missing from OPTIONS");
        }
        assert!(!is_overridable("platform"));
        assert!(!is_overridable("bogus"));
    }
}
