//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation of
//! `--set` pairs before anything is resolved.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release configuration resolver for desktop app packaging
#[derive(Parser, Debug)]
#[command(
    name = "hadron_release_config",
    version,
    about = "Resolves release channel, names and asset filenames for a desktop app release",
    long_about = "Derives the complete release configuration for a desktop app: release channel,
channel-qualified product name/slug/bundle id, packager and installer options, and the
exact filename of every build asset for macOS, Linux and Windows.

Usage:
  hadron_release_config resolve --manifest release.toml --platform linux --arch x64
  hadron_release_config resolve --manifest release.toml --platform win32 --field windows_msi_filename
  hadron_release_config options
  hadron_release_config channel 1.2.0-beta.1

Exit code 0 = configuration resolved and printed."
)]
pub struct Args {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a release configuration and print it as JSON
    Resolve(ResolveArgs),

    /// List the documented options and their defaults
    Options,

    /// Print the release channel of a version
    Channel {
        /// Semantic version (e.g. 1.2.0-beta.1)
        version: String,
    },
}

/// Arguments of `resolve`
///
/// Flags take precedence over manifest values.
#[derive(clap::Args, Debug, Default)]
pub struct ResolveArgs {
    /// Release manifest (TOML, or JSON with a .json extension)
    #[arg(short, long, value_name = "PATH", env = "HADRON_RELEASE_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Package identifier
    #[arg(long)]
    pub name: Option<String>,

    /// Semantic version
    #[arg(long, value_name = "VERSION")]
    pub release_version: Option<String>,

    /// Product name
    #[arg(long)]
    pub product_name: Option<String>,

    /// Target platform: darwin, linux, win32
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Target architecture: x64, ia32, arm64, armv7l
    #[arg(short, long)]
    pub arch: Option<String>,

    /// Author string
    #[arg(long)]
    pub author: Option<String>,

    /// macOS bundle id
    #[arg(long)]
    pub app_bundle_id: Option<String>,

    /// Product description
    #[arg(long)]
    pub description: Option<String>,

    /// Override a documented option (KEY=VALUE, repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Print only this top-level field of the resolved config
    #[arg(short, long, value_name = "KEY")]
    pub field: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Command::Resolve(resolve) = &self.command {
            resolve.validate()?;
        }
        Ok(())
    }
}

impl ResolveArgs {
    /// Validate `--set` pairs
    pub fn validate(&self) -> Result<(), String> {
        for pair in &self.set {
            match pair.split_once('=') {
                Some((key, _)) if !key.trim().is_empty() => {}
                _ => {
                    return Err(format!(
                        "Invalid --set value: {}. Expected KEY=VALUE",
                        pair
                    ));
                }
            }
        }
        Ok(())
    }

    /// Input flags that were given, keyed like manifest entries
    pub fn input_flags(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("version", &self.release_version),
            ("product_name", &self.product_name),
            ("platform", &self.platform),
            ("arch", &self.arch),
            ("author", &self.author),
            ("app_bundle_id", &self.app_bundle_id),
            ("description", &self.description),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    /// `--set` pairs split into key and value
    pub fn set_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.set
            .iter()
            .filter_map(|pair| pair.split_once('='))
            .map(|(key, value)| (key.trim(), value))
    }
}
