//! Numeric version triples

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // One to three dot-separated numeric components, optional leading v
    static ref VERSION_RE: Regex = Regex::new(r"^[vV]?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?$").unwrap();
}

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,
    #[error("Invalid version string \"{version}\": {reason}")]
    Invalid { version: String, reason: String },
}

/// A `major.minor.patch` version compared component-wise as integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version { major, minor, patch }
    }

    /// Parse a dotted version string.
    ///
    /// Missing trailing components default to zero, so `"12.1"` is `12.1.0`.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        if version.is_empty() {
            return Err(VersionError::Empty);
        }

        let caps = VERSION_RE.captures(version).ok_or_else(|| VersionError::Invalid {
            version: version.to_string(),
            reason: describe_mismatch(version),
        })?;

        let component = |index: usize| -> Result<u64, VersionError> {
            match caps.get(index) {
                Some(m) => m.as_str().parse::<u64>().map_err(|_| VersionError::Invalid {
                    version: version.to_string(),
                    reason: format!("component \"{}\" is out of range", m.as_str()),
                }),
                None => Ok(0),
            }
        };

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }
}

fn describe_mismatch(version: &str) -> String {
    let body = version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version);
    let parts: Vec<&str> = body.split('.').collect();

    if parts.len() > 3 {
        format!("expected at most 3 components, found {}", parts.len())
    } else if parts.iter().any(|p| p.is_empty()) {
        "empty component".to_string()
    } else {
        "components must be non-negative integers".to_string()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
