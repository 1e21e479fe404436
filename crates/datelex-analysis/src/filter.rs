//! The date-normalization token filter.
//!
//! Drives one token at a time from an upstream stream, delegates parsing to
//! `DateCandidateParser`, applies the plausibility window, and rewrites the
//! token in place. Parse misses and implausible dates are routed through
//! the fallback policy; nothing per-token is ever an error.

use chrono::{Months, NaiveDateTime, Utc};
use tracing::debug;

use datelex_model::{LocaleId, NormalizerConfig};

use crate::error::ConfigError;
use crate::parser::{DateCandidateParser, ParseOutcome};
use crate::pattern::CompiledPattern;
use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};

/// Oldest a parsed date may be, relative to the filter's clock, before it is
/// treated as a parse artifact rather than an intentional date.
pub const MAX_PAST_YEARS: u32 = 50;

/// Furthest into the future a parsed date may lie and still be trusted.
pub const MAX_FUTURE_YEARS: u32 = 5;

/// Source of "now" for the plausibility window.
///
/// Production uses [`SystemClock`]; tests pin the window with a fixed clock.
pub trait Clock: Send {
    /// Current wall-clock time, UTC.
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Per-token outcome counts, accumulated over the life of a filter instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Tokens pulled from upstream.
    pub tokens: usize,
    /// Tokens rewritten from a plausible parsed date.
    pub normalized: usize,
    /// Tokens that parsed but fell outside the plausibility window and were
    /// rewritten to the current time.
    pub implausible: usize,
    /// Unmatched tokens rewritten to the configured default value.
    pub defaulted: usize,
    /// Unmatched tokens passed through unchanged.
    pub passed_through: usize,
}

/// Token filter that rewrites date-like terms to one canonical format.
///
/// Construction validates the whole configuration; a constructed filter can
/// no longer fail. Each filter instance owns its compiled patterns and is
/// driven by a single caller; the underlying parsing logic is stateless, so
/// independent instances over the same configuration may run concurrently.
pub struct DateNormalizationFilter<S> {
    upstream: S,
    parser: DateCandidateParser,
    output_pattern: CompiledPattern,
    output_locale: LocaleId,
    default_value: Option<String>,
    clock: Box<dyn Clock>,
    stats: FilterStats,
}

impl<S: TokenStream> DateNormalizationFilter<S> {
    /// Build a filter over `upstream` from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the output pattern or any input
    /// pattern is invalid. This is the only point of failure; see the
    /// module docs.
    pub fn from_config(upstream: S, config: &NormalizerConfig) -> Result<Self, ConfigError> {
        let output_pattern = CompiledPattern::compile(&config.output_pattern).map_err(|source| {
            ConfigError::InvalidOutputPattern {
                pattern: config.output_pattern.clone(),
                source,
            }
        })?;
        let parser = DateCandidateParser::new(&config.input_patterns)?;
        Ok(Self {
            upstream,
            parser,
            output_pattern,
            output_locale: config.output_locale,
            default_value: config.default_value.clone(),
            clock: Box::new(SystemClock),
            stats: FilterStats::default(),
        })
    }

    /// Replace the clock. Tests use this to pin the plausibility window.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Outcome counts so far.
    #[must_use]
    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    fn plausible(when: NaiveDateTime, now: NaiveDateTime) -> bool {
        let floor = now.checked_sub_months(Months::new(MAX_PAST_YEARS * 12));
        let ceiling = now.checked_add_months(Months::new(MAX_FUTURE_YEARS * 12));
        match (floor, ceiling) {
            (Some(floor), Some(ceiling)) => floor <= when && when <= ceiling,
            _ => false,
        }
    }
}

impl<S: TokenStream> TokenStream for DateNormalizationFilter<S> {
    fn advance(&mut self) -> bool {
        if !self.upstream.advance() {
            return false;
        }
        self.stats.tokens += 1;
        match self.parser.parse(&self.upstream.token().text) {
            ParseOutcome::Parsed(when) => {
                let now = self.clock.now();
                let rendered = if Self::plausible(when, now) {
                    self.stats.normalized += 1;
                    self.output_pattern.format(when, self.output_locale)
                } else {
                    self.stats.implausible += 1;
                    debug!(
                        parsed = %when,
                        "parsed date outside plausibility window, substituting current time"
                    );
                    self.output_pattern.format(now, self.output_locale)
                };
                let token = self.upstream.token_mut();
                token.text = rendered;
                token.kind = TokenKind::Date;
            }
            ParseOutcome::NoMatch => {
                if let Some(default) = &self.default_value {
                    self.stats.defaulted += 1;
                    self.upstream.token_mut().text = default.clone();
                } else {
                    // pass-through position, no date annotation
                    self.stats.passed_through += 1;
                }
            }
        }
        true
    }

    fn token(&self) -> &Token {
        self.upstream.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.upstream.token_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::VecTokenStream;
    use chrono::NaiveDate;
    use datelex_model::DatePattern;

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn filter_over(
        terms: &[&str],
        config: &NormalizerConfig,
    ) -> DateNormalizationFilter<VecTokenStream> {
        let tokens = terms
            .iter()
            .enumerate()
            .map(|(position, term)| Token::new(*term, position))
            .collect();
        DateNormalizationFilter::from_config(VecTokenStream::new(tokens), config)
            .unwrap()
            .with_clock(FixedClock(fixed_now()))
    }

    fn us_config() -> NormalizerConfig {
        NormalizerConfig {
            output_pattern: "dd-MM-yyyy".to_string(),
            output_locale: LocaleId::En,
            default_value: None,
            input_patterns: vec![DatePattern::new("MM/dd/yyyy", LocaleId::En)],
        }
    }

    #[test]
    fn normalizes_matching_term() {
        let mut filter = filter_over(&["03/29/2017"], &us_config());
        assert!(filter.advance());
        assert_eq!(filter.token().text, "29-03-2017");
        assert_eq!(filter.token().kind, TokenKind::Date);
        assert!(!filter.advance());
        assert_eq!(filter.stats().normalized, 1);
    }

    #[test]
    fn implausible_past_date_becomes_now() {
        let mut filter = filter_over(&["01/15/1900"], &us_config());
        assert!(filter.advance());
        assert_eq!(filter.token().text, "15-06-2024");
        assert_eq!(filter.token().kind, TokenKind::Date);
        assert_eq!(filter.stats().implausible, 1);
    }

    #[test]
    fn implausible_future_date_becomes_now() {
        let mut filter = filter_over(&["01/15/2035"], &us_config());
        assert!(filter.advance());
        assert_eq!(filter.token().text, "15-06-2024");
        assert_eq!(filter.stats().implausible, 1);
    }

    #[test]
    fn plausible_boundary_dates_are_kept() {
        // inside both edges of the window relative to the pinned clock
        let mut filter = filter_over(&["07/01/1974", "06/01/2029"], &us_config());
        assert!(filter.advance());
        assert_eq!(filter.token().text, "01-07-1974");
        assert!(filter.advance());
        assert_eq!(filter.token().text, "01-06-2029");
        assert_eq!(filter.stats().normalized, 2);
        assert_eq!(filter.stats().implausible, 0);
    }

    #[test]
    fn unmatched_term_takes_default_value() {
        let mut config = us_config();
        config.default_value = Some("0".to_string());
        let mut filter = filter_over(&["not a date"], &config);
        assert!(filter.advance());
        assert_eq!(filter.token().text, "0");
        assert_eq!(filter.token().kind, TokenKind::Word);
        assert_eq!(filter.stats().defaulted, 1);
    }

    #[test]
    fn unmatched_term_passes_through_without_default() {
        let mut filter = filter_over(&["hello"], &us_config());
        assert!(filter.advance());
        assert_eq!(filter.token().text, "hello");
        assert_eq!(filter.token().kind, TokenKind::Word);
        assert_eq!(filter.stats().passed_through, 1);
        assert!(!filter.advance());
    }

    #[test]
    fn end_of_stream_propagates() {
        let mut filter = filter_over(&[], &us_config());
        assert!(!filter.advance());
        assert_eq!(filter.stats().tokens, 0);
    }

    #[test]
    fn invalid_output_pattern_blocks_construction() {
        let mut config = us_config();
        config.output_pattern = "dd-MM-qqqq".to_string();
        let err =
            DateNormalizationFilter::from_config(VecTokenStream::new(Vec::new()), &config)
                .err()
                .unwrap();
        assert!(matches!(err, ConfigError::InvalidOutputPattern { .. }));
    }

    #[test]
    fn stats_accumulate_across_outcomes() {
        let mut config = us_config();
        config.default_value = Some("0".to_string());
        let mut filter = filter_over(&["03/29/2017", "garbage", "01/15/1900"], &config);
        while filter.advance() {}
        let stats = filter.stats();
        assert_eq!(stats.tokens, 3);
        assert_eq!(stats.normalized, 1);
        assert_eq!(stats.defaulted, 1);
        assert_eq!(stats.implausible, 1);
    }
}
