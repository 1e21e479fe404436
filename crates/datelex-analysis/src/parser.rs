//! Ordered candidate parsing of raw terms against configured date shapes.

use chrono::NaiveDateTime;
use datelex_model::{DatePattern, LocaleId};
use tracing::trace;

use crate::error::ConfigError;
use crate::pattern::CompiledPattern;

/// Result of attempting to parse one term. Produced per token and consumed
/// immediately, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The term matched an input pattern and parsed to this instant.
    Parsed(NaiveDateTime),
    /// No configured pattern matched the whole term.
    NoMatch,
}

#[derive(Debug, Clone)]
struct Candidate {
    pattern: CompiledPattern,
    locale: LocaleId,
}

/// Tries each configured `(pattern, locale)` pair against a term, in list
/// order, and returns the first successful parse.
///
/// The candidate list is fixed at construction and read-only afterwards;
/// `parse` takes `&self` and keeps no state between invocations, so one
/// parser may back any number of sequential calls and independent parser
/// instances are safe to use from different threads.
#[derive(Debug, Clone)]
pub struct DateCandidateParser {
    candidates: Vec<Candidate>,
}

impl DateCandidateParser {
    /// Compile the configured input patterns, in priority order.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty, a pattern does not compile, or a
    /// pattern carries no year field. All of these block construction;
    /// nothing is reported later per token.
    pub fn new(patterns: &[DatePattern]) -> Result<Self, ConfigError> {
        if patterns.is_empty() {
            return Err(ConfigError::NoInputPatterns);
        }
        let mut candidates = Vec::with_capacity(patterns.len());
        for (index, entry) in patterns.iter().enumerate() {
            let pattern = CompiledPattern::compile(&entry.pattern).map_err(|source| {
                ConfigError::InvalidInputPattern {
                    pattern: entry.pattern.clone(),
                    index,
                    source,
                }
            })?;
            if !pattern.has_year() {
                return Err(ConfigError::MissingYearField {
                    pattern: entry.pattern.clone(),
                    index,
                });
            }
            candidates.push(Candidate {
                pattern,
                locale: entry.locale,
            });
        }
        Ok(Self { candidates })
    }

    /// Try each candidate in order; first successful parse wins.
    ///
    /// The term is trimmed and lowercased before matching, so month names
    /// in any casing are recognized. A miss is a normal outcome, not an
    /// error.
    #[must_use]
    pub fn parse(&self, term: &str) -> ParseOutcome {
        let lowered = term.trim().to_lowercase();
        if lowered.is_empty() {
            return ParseOutcome::NoMatch;
        }
        for candidate in &self.candidates {
            if let Some(when) = candidate.pattern.parse(&lowered, candidate.locale) {
                trace!(
                    pattern = candidate.pattern.source(),
                    locale = %candidate.locale,
                    "term matched input pattern"
                );
                return ParseOutcome::Parsed(when);
            }
        }
        ParseOutcome::NoMatch
    }
}
