//! Validation entry point used by build drivers

use std::fmt;

use crate::constraint::{RuleSet, Verdict};
use crate::error::{Result, ValidationError};
use crate::version::Version;

/// A successful validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approval {
    pub component: String,
    pub package: String,
    pub version: Version,
}

impl fmt::Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} version {} approved", self.component, self.package, self.version)
    }
}

/// Check `candidate` for `package` against `rules`.
///
/// The candidate is parsed first, then every rule. Acceptance rules are
/// OR-ed; a matching exclusion rejects the version even when an acceptance
/// rule matched. Errors are returned, never acted on: terminating the build
/// is the caller's decision.
pub fn validate<S: AsRef<str>>(component: &str, package: &str, candidate: &str, rules: &[S]) -> Result<Approval> {
    let outcome = evaluate(component, package, candidate, rules);

    match &outcome {
        Ok(approval) => log::info!("{}", approval),
        Err(err) => log::error!("{}", err),
    }

    outcome
}

fn evaluate<S: AsRef<str>>(component: &str, package: &str, candidate: &str, rules: &[S]) -> Result<Approval> {
    let version = Version::parse(candidate).map_err(|err| {
        log::debug!("[{}] Unusable version \"{}\" for {}: {}", component, candidate, package, err);
        ValidationError::MissingVersion {
            component: component.to_string(),
            package: package.to_string(),
        }
    })?;

    let rule_set = RuleSet::parse(rules).map_err(|err| ValidationError::MalformedRule {
        package: package.to_string(),
        rule: err.rule,
        reason: err.reason,
    })?;

    match rule_set.evaluate(&version) {
        Verdict::Approved => Ok(Approval {
            component: component.to_string(),
            package: package.to_string(),
            version,
        }),
        Verdict::Excluded => Err(ValidationError::ExcludedVersion {
            package: package.to_string(),
            version: version.to_string(),
            rules: rule_set.to_string(),
        }),
        Verdict::Mismatch => {
            if !rule_set.rules().iter().any(|rule| !rule.is_exclusion()) {
                log::debug!("{}: rule set {} has no acceptance rule", package, rule_set);
            }
            Err(ValidationError::VersionMismatch {
                package: package.to_string(),
                rules: rule_set.to_string(),
                actual: candidate.to_string(),
            })
        }
    }
}
