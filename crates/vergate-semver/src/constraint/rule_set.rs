//! RuleSet - ordered collection of rules evaluated against one version

use std::fmt;

use super::{Rule, RuleError};
use crate::version::Version;

/// Outcome of evaluating a [`RuleSet`] against a version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// At least one acceptance rule matched and no exclusion did
    Approved,
    /// The version is listed by an exclusion rule
    Excluded,
    /// No acceptance rule matched
    Mismatch,
}

/// Rules in caller order, together with the strings they were parsed from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    raw: Vec<String>,
}

impl RuleSet {
    /// Parse every rule string, stopping at the first malformed one
    pub fn parse<S: AsRef<str>>(rules: &[S]) -> Result<Self, RuleError> {
        let mut set = RuleSet {
            rules: Vec::with_capacity(rules.len()),
            raw: Vec::with_capacity(rules.len()),
        };

        for raw in rules {
            let raw = raw.as_ref();
            let rule = Rule::parse(raw)?;
            log::debug!("Rule \"{}\" classified as {:?}", raw, rule);
            set.rules.push(rule);
            set.raw.push(raw.to_string());
        }

        Ok(set)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule strings as supplied
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Acceptance rules are OR-ed together. Exclusions are checked afterwards
    /// and win over any acceptance.
    pub fn evaluate(&self, version: &Version) -> Verdict {
        let mut approved = false;
        let mut exclusions = Vec::new();

        for rule in &self.rules {
            if rule.is_exclusion() {
                exclusions.push(rule);
            } else {
                approved |= rule.matches(version);
            }
        }

        if exclusions.iter().any(|rule| rule.matches(version)) {
            return Verdict::Excluded;
        }

        if approved {
            Verdict::Approved
        } else {
            Verdict::Mismatch
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.raw.join(", "))
    }
}
