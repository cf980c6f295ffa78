//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when building fields from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("Failed to parse validation config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `pattern` rule carried an invalid regular expression.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as written in the configuration.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A rule tag that names a closure, which configuration cannot carry.
    #[error("Rule type '{kind}' can only be built in code, use Rule::predicate")]
    CodeOnlyRule {
        /// The rule tag as written in the configuration.
        kind: String,
    },
}
