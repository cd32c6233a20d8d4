//! Rule types for version gating

mod rule;
mod rule_set;

pub use rule::{Rule, RuleError, EXCLUSION_PREFIX, RANGE_SEPARATOR};
pub use rule_set::{RuleSet, Verdict};
