//! macOS branch: app bundle id, disk image and zip archive.

use super::{BranchContext, PlatformConfig, PlatformFields};
use crate::resolver::asset::Asset;
use crate::resolver::error::{Error, Result};

/// macOS asset filenames.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct MacOsFields {
    /// Disk image (`Hadron Beta.dmg`).
    pub osx_dmg_filename: String,
    /// Zipped app bundle (`Hadron Beta-mac.zip`).
    pub osx_zip_filename: String,
}

/// Builds the macOS packager options and assets.
///
/// The bundle id is required and already carries the channel suffix on
/// the identity. No installer options are produced.
pub(super) fn build(ctx: BranchContext<'_>) -> Result<PlatformConfig> {
    let bundle_id = ctx
        .identity
        .bundle_id
        .clone()
        .ok_or(Error::MissingConfig {
            field: "app_bundle_id",
        })?;

    let icon = ctx.resources.join("darwin").join("Icon.icns");
    let mut packager = ctx.base_packager_options(icon);
    packager.app_bundle_id = Some(bundle_id);
    packager.app_category_type = Some(ctx.options.app_category_type.clone());

    let product_name = &ctx.identity.product_name;
    let fields = MacOsFields {
        osx_dmg_filename: format!("{}.dmg", product_name),
        osx_zip_filename: format!("{}-mac.zip", product_name),
    };

    let assets = vec![
        Asset::new(fields.osx_dmg_filename.as_str(), &ctx.out),
        Asset::new(fields.osx_zip_filename.as_str(), &ctx.out),
    ];

    Ok(ctx.finish(packager, None, assets, PlatformFields::MacOs(fields)))
}
