//! Windows branch: Squirrel installer options, version-string metadata and
//! installer assets.

use super::{BranchContext, PlatformConfig, PlatformFields};
use crate::resolver::asset::Asset;
use crate::resolver::error::{Error, Result};
use crate::resolver::naming;
use std::path::PathBuf;

const RELEASES_FILENAME: &str = "RELEASES";

/// `version-string` resource metadata embedded in the Windows executable.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionString {
    /// First author, without email or URL.
    pub company_name: String,
    /// Product description.
    pub file_description: String,
    /// Channel-qualified product name.
    pub product_name: String,
    /// Channel-qualified slug.
    pub internal_name: String,
}

/// Options handed to the Windows installer builder.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerOptions {
    /// Animation shown while the installer runs.
    pub loading_gif: PathBuf,
    /// signtool parameters. Empty when unsigned.
    pub sign_with_params: String,
    /// Icon shown in Programs and Features.
    pub icon_url: String,
    /// Icon of the setup executable.
    pub setup_icon: PathBuf,
    /// Packaged app directory.
    pub app_directory: PathBuf,
    /// Where installers are written.
    pub output_directory: PathBuf,
    /// Package authors.
    pub authors: Vec<String>,
    /// Application version.
    pub version: String,
    /// Application executable (`Hadron.exe`).
    pub exe: String,
    /// Setup executable (`HadronSetup.exe`).
    pub setup_exe: String,
    /// MSI installer (`HadronSetup.msi`).
    pub setup_msi: String,
    /// Installer window title.
    pub title: String,
    /// Channel-qualified product name.
    pub product_name: String,
    /// Product description.
    pub description: String,
    /// NuGet package id: the product name without spaces.
    pub name: String,
}

/// Windows asset filenames.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct WindowsFields {
    /// `{PName}Setup.exe`
    pub windows_setup_filename: String,
    /// `{PName}Setup.msi`
    pub windows_msi_filename: String,
    /// `{PName}-windows.zip`
    pub windows_zip_filename: String,
    /// Squirrel `RELEASES` manifest.
    pub windows_releases_filename: String,
    /// `{PName without spaces}-{nupkg version}-full.nupkg`
    pub windows_nupkg_full_filename: String,
    /// Same as the full nupkg filename.
    pub windows_nupkg_full_label: String,
}

pub(super) fn build(ctx: BranchContext<'_>) -> Result<PlatformConfig> {
    let authors = ctx.input.authors();
    let company_name = authors
        .first()
        .map(|author| author_name(author))
        .ok_or(Error::MissingConfig { field: "author" })?;

    let product_name = ctx.identity.product_name.clone();
    let nuget_id = naming::compact(&product_name);
    let nupkg_filename = format!(
        "{}-{}-full.nupkg",
        nuget_id,
        naming::nupkg_version(&ctx.version)?
    );

    let description = ctx
        .input
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| product_name.clone());

    let win32_resources = ctx.resources.join("win32");
    let setup_icon = win32_resources.join("Icon.ico");
    let output_directory = ctx.out.join("installers");

    let mut packager = ctx.base_packager_options(setup_icon.clone());
    packager.version_string = Some(VersionString {
        company_name,
        file_description: description.clone(),
        product_name: product_name.clone(),
        internal_name: ctx.identity.slug.clone(),
    });

    let fields = WindowsFields {
        windows_setup_filename: format!("{}Setup.exe", product_name),
        windows_msi_filename: format!("{}Setup.msi", product_name),
        windows_zip_filename: format!("{}-windows.zip", product_name),
        windows_releases_filename: RELEASES_FILENAME.to_string(),
        windows_nupkg_full_label: nupkg_filename.clone(),
        windows_nupkg_full_filename: nupkg_filename,
    };

    let installer = InstallerOptions {
        loading_gif: win32_resources.join("loading.gif"),
        sign_with_params: ctx.options.signtool_params.clone(),
        icon_url: ctx
            .options
            .favicon_url
            .clone()
            .unwrap_or_else(|| setup_icon.display().to_string()),
        setup_icon,
        app_directory: ctx.app_path.clone(),
        output_directory: output_directory.clone(),
        authors,
        version: ctx.input.version.clone(),
        exe: format!("{}.exe", product_name),
        setup_exe: fields.windows_setup_filename.clone(),
        setup_msi: fields.windows_msi_filename.clone(),
        title: product_name.clone(),
        product_name,
        description,
        name: nuget_id,
    };

    let assets = vec![
        Asset::new(fields.windows_setup_filename.as_str(), &output_directory),
        Asset::new(fields.windows_msi_filename.as_str(), &output_directory),
        Asset::new(fields.windows_releases_filename.as_str(), &output_directory),
        Asset::new(fields.windows_nupkg_full_filename.as_str(), &output_directory),
        Asset::new(fields.windows_zip_filename.as_str(), &output_directory),
    ];

    Ok(ctx.finish(
        packager,
        Some(installer),
        assets,
        PlatformFields::Windows(fields),
    ))
}

/// Name part of an npm-style author (`Jane Doe <jane@x.com> (https://x.com)`).
fn author_name(author: &str) -> String {
    author
        .split(['<', '('])
        .next()
        .unwrap_or(author)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_name_strips_email_and_url() {
        assert_eq!(author_name("MongoDB Inc"), "MongoDB Inc");
        assert_eq!(
            author_name("Jane Doe <jane@example.com> (https://example.com)"),
            "Jane Doe"
        );
        assert_eq!(author_name("Jane Doe (https://example.com)"), "Jane Doe");
    }
}
