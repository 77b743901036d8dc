//! Error types for option schemas

use vgate_core::SelectError;

/// Schema loading and resolution errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Document is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Document is not valid YAML
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Option declares no choices
    #[error("option '{option}' declares no choices")]
    EmptyChoices {
        /// Option name
        option: String,
    },

    /// Option lists the same choice twice
    #[error("option '{option}' lists choice '{choice}' more than once")]
    DuplicateChoice {
        /// Option name
        option: String,
        /// Repeated choice
        choice: String,
    },

    /// Default is not one of the option's choices
    #[error("option '{option}' has default '{default}' outside its choices")]
    InvalidDefault {
        /// Option name
        option: String,
        /// Offending default
        default: String,
    },

    /// Two schemas share a name
    #[error("option '{0}' is declared more than once")]
    DuplicateOption(String),

    /// No schema with this name
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// Neither a value nor a default is available
    #[error("option '{option}' has no value and no default")]
    NoValue {
        /// Option name
        option: String,
    },

    /// Value rejected by the option's selector
    #[error(transparent)]
    Select(#[from] SelectError),
}

impl ConfigError {
    /// Check if the error comes from a malformed schema rather than a bad value
    #[inline]
    #[must_use]
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidJson(_)
                | Self::InvalidYaml(_)
                | Self::EmptyChoices { .. }
                | Self::DuplicateChoice { .. }
                | Self::InvalidDefault { .. }
                | Self::DuplicateOption(_)
        )
    }
}
