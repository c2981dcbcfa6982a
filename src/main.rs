//! Hadron release config - resolves release channel, names and asset
//! filenames for a desktop app release.
//!
//! This binary prints the resolved configuration as JSON for packaging
//! tools and CI pipelines.

use hadron_release_config::cli;
use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
