//! Command line interface for the release config resolver.
//!
//! Layers flags over the manifest over the documented defaults, resolves,
//! and prints JSON to stdout.

mod args;

pub use args::{Args, Command, ResolveArgs};

use crate::error::{CliError, Result};
use crate::metadata::{self, ReleaseRequest};
use crate::resolver::{self, OPTIONS};
use serde_json::{Map, Value};
use std::io::Write;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args, &mut std::io::stdout().lock())
}

/// Runs parsed arguments, writing output to `out`
pub fn execute(args: &Args, out: &mut impl Write) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    match &args.command {
        Command::Resolve(resolve) => run_resolve(resolve, out)?,
        Command::Options => print_options(out)?,
        Command::Channel { version } => {
            let channel = resolver::detect_channel(version)?;
            writeln!(out, "{}", channel)?;
        }
    }

    Ok(0)
}

/// Builds the release request for `resolve`: manifest first, then flags
pub fn build_request(args: &ResolveArgs) -> Result<ReleaseRequest> {
    let mut map = match &args.manifest {
        Some(path) => metadata::read_manifest(path)?,
        None => Map::new(),
    };

    for (key, value) in args.input_flags() {
        metadata::insert_input(&mut map, key, Value::String(value.to_string()));
    }
    for (key, value) in args.set_pairs() {
        map.insert(key.to_string(), metadata::parse_set_value(value));
    }

    ReleaseRequest::from_map(map)
}

fn run_resolve(args: &ResolveArgs, out: &mut impl Write) -> Result<()> {
    let request = build_request(args)?;
    let config = resolver::resolve(&request.input, request.overrides)?;

    log::info!(
        "Resolved {} {} ({} channel) for {}-{}",
        config.product_name(),
        config.version(),
        config.channel(),
        config.platform(),
        config.arch()
    );

    let value = serde_json::to_value(&config)?;

    match &args.field {
        Some(field) => {
            let selected = value.get(field).ok_or_else(|| CliError::UnknownField {
                field: field.clone(),
            })?;
            match selected {
                Value::String(s) => writeln!(out, "{}", s)?,
                other => writeln!(out, "{}", serde_json::to_string_pretty(other)?)?,
            }
        }
        None => writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?,
    }

    Ok(())
}

fn print_options(out: &mut impl Write) -> Result<()> {
    let width = OPTIONS.iter().map(|spec| spec.key.len()).max().unwrap_or(0);
    for spec in OPTIONS {
        writeln!(
            out,
            "{:width$}  {} (default: {})",
            spec.key,
            spec.description,
            spec.default,
            width = width
        )?;
    }
    Ok(())
}
