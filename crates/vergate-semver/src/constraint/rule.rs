//! Single version rules: exact, inclusive range and exclusion

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::version::{Version, VersionError};

/// Separator between the bounds of a range rule
pub const RANGE_SEPARATOR: &str = "...";

/// Prefix marking an exclusion rule
pub const EXCLUSION_PREFIX: char = '!';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid rule \"{rule}\": {reason}")]
pub struct RuleError {
    pub rule: String,
    pub reason: String,
}

impl RuleError {
    fn new(rule: &str, reason: impl Into<String>) -> Self {
        RuleError {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }

    fn from_version(rule: &str, err: VersionError) -> Self {
        RuleError::new(rule, err.to_string())
    }
}

/// A single version rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Matches exactly one version
    Exact(Version),
    /// Matches every version between `min` and `max`, both inclusive
    Range { min: Version, max: Version },
    /// Rejects one version regardless of every other rule
    Exclusion(Version),
}

impl Rule {
    /// Classify and parse a rule string.
    ///
    /// The `!` prefix is checked first, then the `A...B` range form; anything
    /// else must be a plain version.
    pub fn parse(rule: &str) -> Result<Self, RuleError> {
        if let Some(excluded) = rule.strip_prefix(EXCLUSION_PREFIX) {
            let version = Version::parse(excluded).map_err(|e| RuleError::from_version(rule, e))?;
            return Ok(Rule::Exclusion(version));
        }

        if let Some((min, max)) = rule.split_once(RANGE_SEPARATOR) {
            let min = Version::parse(min).map_err(|e| RuleError::from_version(rule, e))?;
            let max = Version::parse(max).map_err(|e| RuleError::from_version(rule, e))?;
            if min > max {
                return Err(RuleError::new(
                    rule,
                    format!("range lower bound {} is greater than upper bound {}", min, max),
                ));
            }
            return Ok(Rule::Range { min, max });
        }

        Version::parse(rule)
            .map(Rule::Exact)
            .map_err(|e| RuleError::from_version(rule, e))
    }

    /// Whether the rule names `version`.
    ///
    /// For an exclusion this means the version is the excluded one.
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Rule::Exact(v) | Rule::Exclusion(v) => v == version,
            Rule::Range { min, max } => min <= version && version <= max,
        }
    }

    pub fn is_exclusion(&self) -> bool {
        matches!(self, Rule::Exclusion(_))
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Exact(v) => write!(f, "{}", v),
            Rule::Range { min, max } => write!(f, "{}{}{}", min, RANGE_SEPARATOR, max),
            Rule::Exclusion(v) => write!(f, "{}{}", EXCLUSION_PREFIX, v),
        }
    }
}
