//! Caller-supplied release input and its builder.

use super::error::{Error, Result};

/// Raw inputs to a resolve call.
///
/// `platform` and `arch` fall back to [`ReleaseOptions`] when absent.
///
/// [`ReleaseOptions`]: super::ReleaseOptions
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReleaseInput {
    /// Package identifier (`hadron-app`).
    pub name: String,

    /// Semantic version, optionally carrying a pre-release channel.
    pub version: String,

    /// Human-readable product name (`Hadron`).
    pub product_name: String,

    /// Target platform (`darwin`, `linux`, `win32`).
    pub platform: Option<String>,

    /// Target architecture (`x64`, `ia32`, `arm64`, `armv7l`).
    pub arch: Option<String>,

    /// Author string, comma-separated for several authors.
    pub author: Option<String>,

    /// Reverse-DNS bundle id. Required on macOS.
    pub app_bundle_id: Option<String>,

    /// Short product description.
    pub description: Option<String>,
}

impl ReleaseInput {
    /// Starts a builder.
    pub fn builder() -> ReleaseInputBuilder {
        ReleaseInputBuilder::new()
    }

    /// Authors split on `,`, trimmed, empty entries dropped.
    pub fn authors(&self) -> Vec<String> {
        self.author
            .as_deref()
            .map(|author| {
                author
                    .split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Builder for [`ReleaseInput`].
///
/// Also the deserialization target for manifests, so that a missing
/// required key surfaces as [`Error::MissingConfig`] from [`build`].
///
/// [`build`]: ReleaseInputBuilder::build
///
/// # Examples
///
/// ```
/// use hadron_release_config::resolver::ReleaseInput;
///
/// # fn example() -> hadron_release_config::resolver::Result<()> {
/// let input = ReleaseInput::builder()
///     .name("hadron-app")
///     .version("1.2.0")
///     .product_name("Hadron")
///     .platform("linux")
///     .arch("x64")
///     .build()?;
/// assert_eq!(input.product_name, "Hadron");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseInputBuilder {
    name: Option<String>,
    version: Option<String>,
    #[serde(alias = "productName")]
    product_name: Option<String>,
    platform: Option<String>,
    arch: Option<String>,
    author: Option<String>,
    #[serde(alias = "appBundleId")]
    app_bundle_id: Option<String>,
    description: Option<String>,
}

impl ReleaseInputBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the package identifier.
    ///
    /// # Required
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the semantic version.
    ///
    /// # Required
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the product name.
    ///
    /// # Required
    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// Sets the target platform.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Sets the target architecture.
    pub fn arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = Some(arch.into());
        self
    }

    /// Sets the author string.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the macOS bundle id.
    pub fn app_bundle_id(mut self, app_bundle_id: impl Into<String>) -> Self {
        self.app_bundle_id = Some(app_bundle_id.into());
        self
    }

    /// Sets the product description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] if `name`, `version` or
    /// `product_name` is missing or blank.
    pub fn build(self) -> Result<ReleaseInput> {
        Ok(ReleaseInput {
            name: required(self.name, "name")?,
            version: required(self.version, "version")?,
            product_name: required(self.product_name, "product_name")?,
            platform: self.platform,
            arch: self.arch,
            author: self.author,
            app_bundle_id: self.app_bundle_id,
            description: self.description,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(Error::MissingConfig { field })
}
