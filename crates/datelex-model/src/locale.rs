//! Type-safe locale identifiers for date patterns.
//!
//! Each input pattern is bound to one locale, which selects the month-name
//! tables used when the pattern contains textual month fields. The set is
//! closed: an identifier outside it is a configuration error, reported when
//! the configuration is parsed rather than when a token is processed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Locale bound to a date pattern.
///
/// Identifiers follow ISO 639-1 two-letter codes in configuration files and
/// CLI flags (`"en"`, `"pt"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleId {
    /// English.
    #[default]
    En,
    /// Portuguese.
    Pt,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
    /// Italian.
    It,
}

impl LocaleId {
    /// All supported locales, in a stable order.
    pub const ALL: [LocaleId; 6] = [
        LocaleId::En,
        LocaleId::Pt,
        LocaleId::Es,
        LocaleId::Fr,
        LocaleId::De,
        LocaleId::It,
    ];

    /// The ISO 639-1 code for this locale.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LocaleId::En => "en",
            LocaleId::Pt => "pt",
            LocaleId::Es => "es",
            LocaleId::Fr => "fr",
            LocaleId::De => "de",
            LocaleId::It => "it",
        }
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a locale identifier is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{identifier}' (supported: en, pt, es, fr, de, it)")]
pub struct ParseLocaleError {
    /// The identifier that failed to parse.
    pub identifier: String,
}

impl FromStr for LocaleId {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(LocaleId::En),
            "pt" => Ok(LocaleId::Pt),
            "es" => Ok(LocaleId::Es),
            "fr" => Ok(LocaleId::Fr),
            "de" => Ok(LocaleId::De),
            "it" => Ok(LocaleId::It),
            _ => Err(ParseLocaleError {
                identifier: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        assert_eq!("en".parse::<LocaleId>().unwrap(), LocaleId::En);
        assert_eq!("PT".parse::<LocaleId>().unwrap(), LocaleId::Pt);
        assert_eq!(" fr ".parse::<LocaleId>().unwrap(), LocaleId::Fr);
    }

    #[test]
    fn rejects_unknown_code() {
        let err = "xx".parse::<LocaleId>().unwrap_err();
        assert_eq!(err.identifier, "xx");
    }

    #[test]
    fn display_round_trips() {
        for locale in LocaleId::ALL {
            assert_eq!(locale.code().parse::<LocaleId>().unwrap(), locale);
        }
    }
}
