//! Version constraint validation for build-time dependency gates
//!
//! A gate checks the resolved version of a dependency against a list of
//! rules: exact versions (`12.1.0`), inclusive ranges (`12.3.0...12.3.6`)
//! and exclusions (`!12.3.4`). Exclusions always win over acceptance.

pub mod constraint;
mod error;
mod validator;
mod version;

pub use constraint::{Rule, RuleError, RuleSet, Verdict};
pub use error::{Result, ValidationError};
pub use validator::{validate, Approval};
pub use version::{Version, VersionError};
