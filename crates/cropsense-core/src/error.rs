//! Error types for cropsense-core.
//!
//! Updating the store and running the simulator cannot fail. Errors only come
//! from rejecting a configuration before anything is started, or from parsing
//! user-supplied names.

use thiserror::Error;

use cropsense_types::ParseError;

/// Errors produced by cropsense-core.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Options or thresholds were rejected during validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A name could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type alias using cropsense-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = Error::InvalidConfig("interval must be > 0".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: interval must be > 0");
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: Error = ParseError::UnknownMetric("co2".to_string()).into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("co2"));
    }
}
