//! Release manifest loading.
//!
//! A manifest is a flat TOML or JSON mapping. Input keys (`name`, `version`,
//! `product_name`, ...) become the [`ReleaseInput`]; every other key must be
//! a documented option and becomes part of the [`OptionOverrides`].

use crate::error::{CliError, ReleaseError, Result};
use crate::resolver::{self, OptionOverrides, ReleaseInput, ReleaseInputBuilder};
use anyhow::Context;
use serde_json::{Map, Value};
use std::path::Path;

/// Keys routed to the release input rather than the option overrides.
pub const INPUT_KEYS: &[&str] = &[
    "name",
    "version",
    "product_name",
    "productName",
    "platform",
    "arch",
    "author",
    "app_bundle_id",
    "appBundleId",
    "description",
];

/// Input keys with a camelCase alias, as (canonical, alias).
pub const INPUT_ALIASES: &[(&str, &str)] = &[
    ("product_name", "productName"),
    ("app_bundle_id", "appBundleId"),
];

/// Sets an input key, replacing any value stored under its alias.
pub fn insert_input(map: &mut Map<String, Value>, key: &str, value: Value) {
    for (canonical, alias) in INPUT_ALIASES {
        if key == *canonical || key == *alias {
            map.remove(*canonical);
            map.remove(*alias);
        }
    }
    map.insert(key.to_string(), value);
}

/// Everything needed for one resolve call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// Release input.
    pub input: ReleaseInput,
    /// Overrides of the documented default options.
    pub overrides: OptionOverrides,
}

impl ReleaseRequest {
    /// Splits a flat mapping into input and overrides.
    ///
    /// # Errors
    ///
    /// - [`resolver::Error::InvalidOption`] for keys that are neither input
    ///   keys nor documented options, and for mistyped option values
    /// - [`resolver::Error::MissingConfig`] when a required input key is absent
    pub fn from_map(mut map: Map<String, Value>) -> Result<Self> {
        let mut input_map = Map::new();
        for key in INPUT_KEYS {
            if let Some(value) = map.remove(*key) {
                input_map.insert((*key).to_string(), value);
            }
        }

        if let Some(key) = map.keys().find(|key| !resolver::is_overridable(key)) {
            return Err(resolver::Error::InvalidOption {
                key: key.clone(),
                reason: "not a recognized option".to_string(),
            }
            .into());
        }

        let overrides: OptionOverrides =
            serde_json::from_value(Value::Object(map)).map_err(|e| {
                resolver::Error::InvalidOption {
                    key: "options".to_string(),
                    reason: e.to_string(),
                }
            })?;

        let builder: ReleaseInputBuilder =
            serde_json::from_value(Value::Object(input_map)).map_err(|e| {
                CliError::InvalidArguments {
                    reason: format!("Invalid release input: {}", e),
                }
            })?;

        Ok(Self {
            input: builder.build()?,
            overrides,
        })
    }

    /// Same as [`ReleaseRequest::from_map`] for an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArguments`] unless `value` is an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(CliError::InvalidArguments {
                reason: format!("Release manifest must be a table, got {}", other),
            }
            .into()),
        }
    }
}

/// Reads a manifest file into a flat mapping.
///
/// `.json` files are parsed as JSON; anything else as TOML.
pub fn read_manifest(path: &Path) -> Result<Map<String, Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let value = if is_json {
        serde_json::from_str::<Value>(&contents)?
    } else {
        let table: toml::Table = toml::from_str(&contents)?;
        serde_json::to_value(table)?
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ReleaseError::Cli(CliError::InvalidArguments {
            reason: format!("Manifest {} must contain a table", path.display()),
        })),
    }
}

/// Loads a manifest file into a [`ReleaseRequest`].
pub fn load_manifest(path: &Path) -> Result<ReleaseRequest> {
    let map = read_manifest(path)?;
    log::debug!("Loaded {} keys from {}", map.len(), path.display());
    ReleaseRequest::from_map(map)
}

/// Parses a `--set` value.
///
/// Arrays and quoted strings are parsed as TOML values
/// (`["python3", "libsecret-1-0"]`); everything else is taken verbatim.
pub fn parse_set_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if !(trimmed.starts_with('[') || trimmed.starts_with('"')) {
        return Value::String(raw.to_string());
    }

    toml::from_str::<toml::Table>(&format!("value = {}", trimmed))
        .ok()
        .and_then(|mut table| table.remove("value"))
        .and_then(|value| serde_json::to_value(value).ok())
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn splits_input_and_overrides() {
        let request = ReleaseRequest::from_map(object(json!({
            "name": "hadron-app",
            "version": "1.2.0",
            "product_name": "Hadron",
            "platform": "linux",
            "out_dir": "build",
            "deb_depends": ["python3"]
        })))
        .unwrap();

        assert_eq!(request.input.name, "hadron-app");
        assert_eq!(request.input.platform.as_deref(), Some("linux"));
        assert_eq!(request.overrides.out_dir.as_deref(), Some("build"));
        assert_eq!(request.overrides.deb_depends, Some(vec!["python3".to_string()]));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ReleaseRequest::from_map(object(json!({
            "name": "hadron-app",
            "version": "1.2.0",
            "product_name": "Hadron",
            "bogus": 1
        })))
        .unwrap_err();

        assert!(matches!(
            err.as_resolve_error(),
            Some(resolver::Error::InvalidOption { key, .. }) if key == "bogus"
        ));
    }

    #[test]
    fn missing_input_key_is_missing_config() {
        let err = ReleaseRequest::from_map(object(json!({ "name": "hadron-app" }))).unwrap_err();
        assert!(matches!(
            err.as_resolve_error(),
            Some(resolver::Error::MissingConfig { field: "version" })
        ));
    }

    #[test]
    fn mistyped_option_is_invalid() {
        let err = ReleaseRequest::from_map(object(json!({
            "name": "hadron-app",
            "version": "1.2.0",
            "product_name": "Hadron",
            "deb_depends": "python"
        })))
        .unwrap_err();
        assert!(matches!(
            err.as_resolve_error(),
            Some(resolver::Error::InvalidOption { .. })
        ));
    }

    #[test]
    fn inserted_input_replaces_its_alias() {
        let mut map = object(json!({
            "name": "hadron-app",
            "version": "1.2.0",
            "productName": "Hadron",
            "appBundleId": "com.mongodb.hadron"
        }));
        insert_input(&mut map, "product_name", json!("Compass"));
        insert_input(&mut map, "app_bundle_id", json!("com.mongodb.compass"));
        assert!(!map.contains_key("productName"));
        assert!(!map.contains_key("appBundleId"));

        let request = ReleaseRequest::from_map(map).unwrap();
        assert_eq!(request.input.product_name, "Compass");
        assert_eq!(request.input.app_bundle_id.as_deref(), Some("com.mongodb.compass"));
    }

    #[test]
    fn set_values_parse_arrays_and_keep_plain_strings() {
        assert_eq!(parse_set_value("[\"python3\"]"), json!(["python3"]));
        assert_eq!(parse_set_value("\"quoted\""), json!("quoted"));
        assert_eq!(parse_set_value("2"), json!("2"));
        assert_eq!(parse_set_value("/a /f cert.pfx"), json!("/a /f cert.pfx"));
    }

    #[test]
    fn reads_toml_and_json_manifests() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("release.toml");
        std::fs::write(
            &toml_path,
            "name = \"hadron-app\"\nversion = \"1.2.0\"\nproduct_name = \"Hadron\"\nrpm_revision = \"2\"\n",
        )
        .unwrap();
        let request = load_manifest(&toml_path).unwrap();
        assert_eq!(request.overrides.rpm_revision.as_deref(), Some("2"));

        let json_path = dir.path().join("release.json");
        std::fs::write(
            &json_path,
            r#"{"name": "hadron-app", "version": "1.2.0-beta.1", "productName": "Hadron"}"#,
        )
        .unwrap();
        let request = load_manifest(&json_path).unwrap();
        assert_eq!(request.input.version, "1.2.0-beta.1");
    }

    #[test]
    fn missing_manifest_reports_path() {
        let err = load_manifest(Path::new("/nonexistent/release.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/release.toml"));
    }
}
