//! Typed errors for the hateoas crate
//!
//! Link generation itself never fails: unregistered resource types,
//! unresolvable identifiers and unusable request contexts all degrade to
//! fewer (or no) links. The only fallible surface is configuration, which is
//! loaded and checked once at startup.

use std::path::PathBuf;

/// Errors raised while loading or validating link configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read configuration file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid [`HateoasConfig`](crate::config::HateoasConfig)
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A resource lists a default link type outside the fixed table
    #[error("resource '{resource_type}' declares unknown default link type '{relation}'")]
    UnknownLinkType {
        resource_type: String,
        relation: String,
    },

    /// A custom link template uses a placeholder the engine does not substitute
    #[error(
        "resource '{resource_type}' custom link '{relation}' uses unknown placeholder '{{{placeholder}}}'"
    )]
    UnknownPlaceholder {
        resource_type: String,
        relation: String,
        placeholder: String,
    },
}

impl ConfigError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR",
            ConfigError::UnknownLinkType { .. } => "UNKNOWN_LINK_TYPE",
            ConfigError::UnknownPlaceholder { .. } => "UNKNOWN_PLACEHOLDER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_placeholder_message_keeps_braces() {
        let err = ConfigError::UnknownPlaceholder {
            resource_type: "transaction".to_string(),
            relation: "receipt".to_string(),
            placeholder: "uuid".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "resource 'transaction' custom link 'receipt' uses unknown placeholder '{uuid}'"
        );
        assert_eq!(err.error_code(), "UNKNOWN_PLACEHOLDER");
    }

    #[test]
    fn test_parse_error_converts_from_yaml() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{ not: a list").unwrap_err();
        let err: ConfigError = yaml_err.into();

        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
