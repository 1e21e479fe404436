//! Loading and merging filter configuration.
//!
//! The configuration layer is external to the filter core: this module is
//! the CLI's implementation of it. A JSON file supplies a full
//! `NormalizerConfig`; individual CLI flags override single fields on top
//! of the file (or of the built-in default configuration).

use std::path::Path;

use anyhow::{Context, Result};
use datelex_model::{DatePattern, LocaleId, NormalizerConfig};

/// Read a `NormalizerConfig` from a JSON file.
///
/// Only well-formedness is checked here; pattern validation happens when
/// the filter is constructed from the returned record.
pub fn load_config(path: &Path) -> Result<NormalizerConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let config = serde_json::from_str(&contents)
        .with_context(|| format!("parse config file {}", path.display()))?;
    Ok(config)
}

/// Field-level overrides collected from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replacement output pattern.
    pub output_pattern: Option<String>,
    /// Replacement output locale.
    pub output_locale: Option<LocaleId>,
    /// Replacement default value for unmatched terms.
    pub default_value: Option<String>,
    /// Replacement input pattern list; an empty list keeps the base list.
    pub input_patterns: Vec<DatePattern>,
}

/// Apply overrides on top of a base configuration (or the default one).
#[must_use]
pub fn resolve_config(
    base: Option<NormalizerConfig>,
    overrides: ConfigOverrides,
) -> NormalizerConfig {
    let mut config = base.unwrap_or_default();
    if let Some(pattern) = overrides.output_pattern {
        config.output_pattern = pattern;
    }
    if let Some(locale) = overrides.output_locale {
        config.output_locale = locale;
    }
    if let Some(value) = overrides.default_value {
        config.default_value = Some(value);
    }
    if !overrides.input_patterns.is_empty() {
        config.input_patterns = overrides.input_patterns;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = ConfigOverrides {
            output_pattern: Some("yyyy-MM-dd".to_string()),
            ..ConfigOverrides::default()
        };
        let config = resolve_config(None, overrides);
        assert_eq!(config.output_pattern, "yyyy-MM-dd");
        // the default input patterns survive
        assert_eq!(config.input_patterns.len(), 2);
    }

    #[test]
    fn explicit_input_patterns_replace_the_list() {
        let overrides = ConfigOverrides {
            input_patterns: vec![DatePattern::new("yyyyMMdd", LocaleId::En)],
            ..ConfigOverrides::default()
        };
        let config = resolve_config(None, overrides);
        assert_eq!(config.input_patterns.len(), 1);
        assert_eq!(config.input_patterns[0].pattern, "yyyyMMdd");
    }
}
