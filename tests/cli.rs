//! CLI integration tests
//!
//! These run the built binary against the fixture manifests and check the
//! JSON it prints.

use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a command instance for the resolver binary
fn release_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("hadron_release_config"))
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/hadron-app")
        .join(name)
}

fn resolve_json(args: &[&str]) -> serde_json::Value {
    let output = release_cmd()
        .arg("resolve")
        .arg("--manifest")
        .arg(fixture("release.toml"))
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// resolve
// =============================================================================

#[test]
fn test_resolve_prints_linux_config() {
    let value = resolve_json(&["--platform", "linux", "--arch", "x64"]);

    assert_eq!(value["channel"], "stable");
    assert_eq!(value["productName"], "Hadron");
    assert_eq!(value["linux_deb_filename"], "hadron-app_1.2.0_amd64.deb");
    // rpm_revision comes from the manifest
    assert_eq!(value["linux_rpm_filename"], "hadron-app-1.2.0-2.x86_64.rpm");
    assert_eq!(
        value["debian_config"]["depends"],
        serde_json::json!(["python3", "libsecret-1-0"])
    );
}

#[test]
fn test_flags_override_manifest() {
    let value = resolve_json(&[
        "--platform",
        "darwin",
        "--arch",
        "arm64",
        "--release-version",
        "1.3.0-beta.2",
    ]);

    assert_eq!(value["channel"], "beta");
    assert_eq!(value["bundleId"], "com.mongodb.hadron.beta");
    assert_eq!(value["osx_dmg_filename"], "Hadron Beta.dmg");
    assert_eq!(value["packagerOptions"]["arch"], "arm64");
}

#[test]
fn test_set_overrides_options() {
    let dir = TempDir::new().unwrap();
    let cwd = format!("cwd={}", dir.path().display());

    let value = resolve_json(&[
        "--platform",
        "linux",
        "--arch",
        "x64",
        "--set",
        &cwd,
        "--set",
        "out_dir=build",
        "--set",
        "rpm_requires=[\"libsecret\"]",
    ]);

    let out = dir.path().join("build");
    assert_eq!(value["out"], out.display().to_string());
    assert_eq!(value["redhat_config"]["requires"], serde_json::json!(["libsecret"]));
}

#[test]
fn test_json_manifest() {
    release_cmd()
        .args(["resolve", "--platform", "win32", "--arch", "x64"])
        .arg("--manifest")
        .arg(fixture("release.json"))
        .args(["--field", "windows_nupkg_full_filename"])
        .assert()
        .success()
        .stdout("HadronBeta-1.2.0-beta1-full.nupkg\n");
}

#[test]
fn test_flags_override_camel_case_manifest_keys() {
    release_cmd()
        .args(["resolve", "--platform", "darwin", "--arch", "x64"])
        .arg("--manifest")
        .arg(fixture("release.json"))
        .args(["--product-name", "Compass", "--app-bundle-id", "com.mongodb.compass"])
        .args(["--field", "bundleId"])
        .assert()
        .success()
        .stdout("com.mongodb.compass.beta\n");

    release_cmd()
        .args(["resolve", "--platform", "linux", "--arch", "x64"])
        .arg("--manifest")
        .arg(fixture("release.json"))
        .args(["--product-name", "Compass", "--field", "productName"])
        .assert()
        .success()
        .stdout("Compass Beta\n");
}

#[test]
fn test_field_prints_raw_string() {
    release_cmd()
        .args(["resolve", "--platform", "win32", "--arch", "x64"])
        .arg("--manifest")
        .arg(fixture("release.toml"))
        .args(["--field", "windows_msi_filename"])
        .assert()
        .success()
        .stdout("HadronSetup.msi\n");
}

#[test]
fn test_manifest_from_env() {
    release_cmd()
        .env("HADRON_RELEASE_MANIFEST", fixture("release.toml"))
        .args(["resolve", "--platform", "linux", "--arch", "ia32"])
        .args(["--field", "linux_tar_filename"])
        .assert()
        .success()
        .stdout("hadron-app-linux-ia32.tar.gz\n");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_unknown_field_fails() {
    release_cmd()
        .args(["resolve", "--platform", "linux", "--arch", "x64"])
        .arg("--manifest")
        .arg(fixture("release.toml"))
        .args(["--field", "osx_dmg_filename"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown field: osx_dmg_filename"));
}

#[test]
fn test_unknown_option_fails() {
    release_cmd()
        .args(["resolve", "--platform", "linux", "--arch", "x64"])
        .arg("--manifest")
        .arg(fixture("release.toml"))
        .args(["--set", "bogus=1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn test_malformed_set_fails() {
    release_cmd()
        .args(["resolve", "--set", "out_dir"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Expected KEY=VALUE"));
}

#[test]
fn test_missing_manifest_fails() {
    let dir = TempDir::new().unwrap();

    release_cmd()
        .arg("resolve")
        .arg("--manifest")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_missing_input_fails() {
    release_cmd()
        .args(["resolve", "--name", "hadron-app", "--platform", "linux"])
        .env_remove("HADRON_RELEASE_MANIFEST")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("version"));
}

#[test]
fn test_unsupported_platform_fails() {
    release_cmd()
        .args(["resolve", "--platform", "freebsd"])
        .arg("--manifest")
        .arg(fixture("release.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("freebsd"));
}

// =============================================================================
// options / channel
// =============================================================================

#[test]
fn test_options_lists_defaults() {
    release_cmd()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("rpm_revision"))
        .stdout(predicate::str::contains("Databases"));
}

#[test]
fn test_channel_command() {
    release_cmd()
        .args(["channel", "1.2.0-beta.1"])
        .assert()
        .success()
        .stdout("beta\n");

    release_cmd()
        .args(["channel", "1.2.0"])
        .assert()
        .success()
        .stdout("stable\n");

    release_cmd()
        .args(["channel", "not-a-version"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
