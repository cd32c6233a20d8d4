use thiserror::Error;

/// Fatal outcome of a validation call.
///
/// Every variant is a configuration defect; callers are expected to abort
/// the build step rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("[{component}] Could not determine the version of {package}")]
    MissingVersion { component: String, package: String },

    #[error("{package}: invalid version rule \"{rule}\": {reason}")]
    MalformedRule {
        package: String,
        rule: String,
        reason: String,
    },

    #[error("{package} version mismatch! Rules: {rules}, found: {actual}")]
    VersionMismatch {
        package: String,
        rules: String,
        actual: String,
    },

    #[error("{package} version {version} is explicitly excluded. Rules: {rules}")]
    ExcludedVersion {
        package: String,
        version: String,
        rules: String,
    },
}

impl ValidationError {
    /// Stable identifier for machine-readable reports
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingVersion { .. } => "missing_version",
            ValidationError::MalformedRule { .. } => "malformed_rule",
            ValidationError::VersionMismatch { .. } => "version_mismatch",
            ValidationError::ExcludedVersion { .. } => "excluded_version",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
