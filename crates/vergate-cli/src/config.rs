use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "vergate.toml";

/// The gate manifest (vergate.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateManifest {
    /// Resolved versions keyed by package name
    pub versions: IndexMap<String, String>,

    /// Gates, checked in declaration order
    #[serde(rename = "gate")]
    pub gates: Vec<GateSpec>,
}

/// One (component, package) pair to validate
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateSpec {
    pub component: String,
    pub package: String,

    /// Overrides `[versions]` for this gate only
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub rules: Vec<String>,
}

impl GateManifest {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load vergate.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let manifest_path = current.join(MANIFEST_FILE);

            if manifest_path.exists() {
                let manifest = Self::from_path(&manifest_path)?;
                return Ok(Some((manifest_path, manifest)));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Version for a gate: command-line override, then the gate's own
    /// `version`, then `[versions]`
    pub fn resolve_version<'a>(
        &'a self,
        gate: &'a GateSpec,
        overrides: &'a IndexMap<String, String>,
    ) -> Option<&'a str> {
        overrides
            .get(&gate.package)
            .or(gate.version.as_ref())
            .or_else(|| self.versions.get(&gate.package))
            .map(String::as_str)
    }
}

/// Parse a `PACKAGE=VERSION` pair
pub fn parse_override(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((package, version)) if !package.is_empty() => Ok((package.to_string(), version.to_string())),
        _ => Err(format!("expected PACKAGE=VERSION, got \"{}\"", s)),
    }
}
