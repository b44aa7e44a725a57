//! Error types for mapping-code generation.

use std::error::Error;
use std::fmt;

/// Result of a configuration-time generation step.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Typed error category for configuration defects.
///
/// Each variant carries the identity of the offending mapping entry so
/// diagnostics can point at the configuration line that caused it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConfigErrorKind {
    /// A member's aggregate path resolved to zero path items.
    InvalidAggregatePath { member: String },

    /// A bound aggregate-function implementation declares neither the
    /// code-generation capability nor the basic aggregate capability.
    UnsupportedImplementation { member: String, function: String },

    /// No implementation is registered under the requested function name.
    UnknownFunction { name: String },
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAggregatePath { member } => {
                write!(
                    f,
                    "aggregate path for member `{member}` resolves to no path items; \
                     check the member's source expression in the mapping configuration"
                )
            }
            Self::UnsupportedImplementation { member, function } => {
                write!(
                    f,
                    "aggregate function `{function}` for member `{member}` declares \
                     neither a code generator nor a basic aggregate capability, \
                     so no statements can be generated"
                )
            }
            Self::UnknownFunction { name } => {
                write!(f, "no aggregate function is registered under `{name}`")
            }
        }
    }
}

/// A configuration error raised during mapping-code generation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    message: String,
}

impl ConfigError {
    /// Create an error from its kind, rendering the message once.
    pub fn from_kind(kind: ConfigErrorKind) -> Self {
        let message = kind.to_string();
        ConfigError { kind, message }
    }

    /// The typed category of this error.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }

    /// The rendered diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ConfigError {}

/// A member's path resolved to zero path items.
#[cold]
pub fn invalid_aggregate_path(member: &str) -> ConfigError {
    ConfigError::from_kind(ConfigErrorKind::InvalidAggregatePath {
        member: member.to_string(),
    })
}

/// A bound implementation satisfies neither generation capability.
#[cold]
pub fn unsupported_implementation(member: &str, function: &str) -> ConfigError {
    ConfigError::from_kind(ConfigErrorKind::UnsupportedImplementation {
        member: member.to_string(),
        function: function.to_string(),
    })
}

/// Lookup failed for an unregistered function name.
#[cold]
pub fn unknown_function(name: &str) -> ConfigError {
    ConfigError::from_kind(ConfigErrorKind::UnknownFunction {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_path_names_the_member() {
        let err = invalid_aggregate_path("TotalPrice");
        assert!(matches!(
            err.kind(),
            ConfigErrorKind::InvalidAggregatePath { member } if member == "TotalPrice"
        ));
        assert!(err.message().contains("TotalPrice"));
    }

    #[test]
    fn unsupported_implementation_names_member_and_function() {
        let err = unsupported_implementation("LineCount", "count");
        assert!(err.message().contains("LineCount"));
        assert!(err.message().contains("count"));
    }

    #[test]
    fn display_matches_message() {
        let err = unknown_function("median");
        assert_eq!(err.to_string(), err.message());
    }
}
