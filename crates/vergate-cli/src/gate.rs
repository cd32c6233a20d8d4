//! Gate command - validate every gate declared in vergate.toml.

use anyhow::{bail, Context, Result};
use clap::Args;
use indexmap::IndexMap;
use std::path::PathBuf;

use crate::config::{parse_override, GateManifest, MANIFEST_FILE};
use crate::output::{Format, GateRecord, Report};

#[derive(Args, Debug)]
pub struct GateArgs {
    /// Path to the manifest (default: vergate.toml searched upward)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Resolved version for a package, overriding the manifest
    #[arg(long = "set", value_name = "PACKAGE=VERSION", value_parser = parse_override, action = clap::ArgAction::Append)]
    pub overrides: Vec<(String, String)>,

    /// Check every gate instead of stopping at the first failure
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn execute(args: GateArgs, quiet: bool) -> Result<i32> {
    let (path, manifest) = match args.manifest {
        Some(path) => {
            let manifest = GateManifest::from_path(&path)?;
            (path, manifest)
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
            match GateManifest::load(&cwd)? {
                Some(found) => found,
                None => bail!("No {} found in {} or any parent directory", MANIFEST_FILE, cwd.display()),
            }
        }
    };
    log::debug!("Using manifest {}", path.display());

    let overrides: IndexMap<String, String> = args.overrides.into_iter().collect();
    let report = run_gates(&manifest, &overrides, args.keep_going);

    if report.results.is_empty() {
        log::warn!("{} declares no gates", path.display());
    }

    let rendered = report.render(args.format, quiet)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(report.exit_code())
}

/// Validate gates in declaration order. Without `keep_going` the first
/// failure ends the run.
pub fn run_gates(manifest: &GateManifest, overrides: &IndexMap<String, String>, keep_going: bool) -> Report {
    let mut results = Vec::with_capacity(manifest.gates.len());

    for gate in &manifest.gates {
        let version = manifest.resolve_version(gate, overrides);
        let outcome = vergate_semver::validate(&gate.component, &gate.package, version.unwrap_or(""), gate.rules.as_slice());
        let failed = outcome.is_err();

        results.push(GateRecord::new(&gate.component, &gate.package, version, &outcome));

        if failed && !keep_going {
            break;
        }
    }

    Report::new(results)
}
