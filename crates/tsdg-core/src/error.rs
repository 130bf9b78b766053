//! Error types for configuration loading and validation.

/// Error type for everything that can go wrong before the first row is
/// generated.
///
/// All variants are fatal: generation either validates completely and
/// produces the full row stream, or fails with one of these before any row
/// exists.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Structurally invalid or semantically inconsistent configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Distribution type string with no matching implementation
    #[error("Unknown distribution type: {0}")]
    UnknownDistribution(String),

    /// Start or end timestamp is not valid RFC 3339
    #[error("Failed to parse timestamp '{value}': {source}")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Error reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::Configuration`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
