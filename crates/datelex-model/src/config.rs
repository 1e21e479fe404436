//! Configuration records for the date-normalization filter.
//!
//! These records are supplied by the configuration layer before any token is
//! processed. They are plain data: pattern validation happens once, when the
//! filter is constructed from them, never per token.

use serde::{Deserialize, Serialize};

use crate::locale::LocaleId;

/// One recognized input date shape: a date-format pattern bound to a locale.
///
/// The pattern syntax is the date-format syntax the configuration surface has
/// always used (`"MM/dd/yyyy"`, `"dd 'de' MMMM 'de' yyyy"`). A filter
/// instance owns an ordered, fixed list of these; order encodes priority and
/// the first matching pattern wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePattern {
    /// The date-format pattern string.
    pub pattern: String,
    /// Locale used to resolve textual month names in the pattern.
    #[serde(default)]
    pub locale: LocaleId,
}

impl DatePattern {
    /// Build a pattern bound to a locale.
    #[must_use]
    pub fn new(pattern: impl Into<String>, locale: LocaleId) -> Self {
        Self {
            pattern: pattern.into(),
            locale,
        }
    }
}

/// Configuration for one `DateNormalizationFilter` instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Pattern every recognized date is rewritten to.
    pub output_pattern: String,

    /// Locale used when the output pattern contains textual month names.
    #[serde(default)]
    pub output_locale: LocaleId,

    /// Replacement term emitted when no input pattern matches. When absent,
    /// unmatched tokens pass through unchanged.
    #[serde(default)]
    pub default_value: Option<String>,

    /// Ordered list of recognized input shapes; first match wins.
    pub input_patterns: Vec<DatePattern>,
}

/// Output pattern used when the configuration layer supplies none.
pub const DEFAULT_OUTPUT_PATTERN: &str = "dd-MM-yyyy";

impl Default for NormalizerConfig {
    /// The historically observed configuration: day-month-year output and
    /// Portuguese long-form plus US numeric input shapes.
    fn default() -> Self {
        Self {
            output_pattern: DEFAULT_OUTPUT_PATTERN.to_string(),
            output_locale: LocaleId::En,
            default_value: None,
            input_patterns: vec![
                DatePattern::new("dd 'de' MMMM 'de' yyyy", LocaleId::Pt),
                DatePattern::new("MM/dd/yyyy", LocaleId::En),
            ],
        }
    }
}
