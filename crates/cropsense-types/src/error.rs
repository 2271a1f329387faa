//! Error types for parsing in cropsense-types.

use thiserror::Error;

/// Errors that can occur when parsing crop sensor types from text.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The name does not match any known metric.
    #[error("Unknown metric: {0} (expected humidity, temperature or sunlight)")]
    UnknownMetric(String),
    /// The text does not match any known suggestion.
    #[error("Unknown suggestion: {0}")]
    UnknownSuggestion(String),
}

/// Result type alias using cropsense-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
