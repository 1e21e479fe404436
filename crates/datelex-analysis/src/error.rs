//! Error types for pattern compilation and filter configuration.
//!
//! Everything here is a construction-time failure: it blocks building a
//! parser or filter and is surfaced before any token is processed. Per-token
//! parse misses are not errors; they are routed through the filter's
//! fallback policy.

use thiserror::Error;

/// Errors from compiling a date-format pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern string is empty.
    #[error("empty pattern")]
    Empty,

    /// Pattern uses a field letter this filter does not support.
    #[error("unsupported pattern field '{letter}' at position {position}")]
    UnsupportedField { letter: char, position: usize },

    /// A `'...'` quoted literal was opened but never closed.
    #[error("unterminated quoted literal at position {position}")]
    UnterminatedQuote { position: usize },
}

/// Errors from validating a `NormalizerConfig` at filter construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The output pattern failed to compile.
    #[error("invalid output pattern '{pattern}': {source}")]
    InvalidOutputPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    /// An input pattern failed to compile.
    #[error("invalid input pattern '{pattern}' (index {index}): {source}")]
    InvalidInputPattern {
        pattern: String,
        index: usize,
        #[source]
        source: PatternError,
    },

    /// An input pattern carries no year field, so every parse would be
    /// ambiguous about which year was meant.
    #[error("input pattern '{pattern}' (index {index}) has no year field")]
    MissingYearField { pattern: String, index: usize },

    /// The input pattern list is empty; such a filter could never match.
    #[error("no input patterns configured")]
    NoInputPatterns,
}
