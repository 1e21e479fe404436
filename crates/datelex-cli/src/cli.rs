//! CLI argument definitions for datelex.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use datelex_model::{DatePattern, LocaleId};

#[derive(Parser)]
#[command(
    name = "datelex",
    version,
    about = "datelex - Normalize date-like terms to one canonical format",
    long_about = "Rewrite date-like terms in a token stream to a single canonical\n\
                  output format, so downstream indexing and range queries match\n\
                  dates uniformly regardless of source language or field order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow term text in debug logs (terms may be sensitive document data).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize terms from a file or stdin.
    Normalize(NormalizeArgs),

    /// Show the active input pattern list and output pattern.
    Patterns(PatternsArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Input file of terms, one per line ('-' reads stdin).
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: PathBuf,

    /// JSON file with a full normalizer configuration.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output date pattern (e.g. "dd-MM-yyyy").
    #[arg(long = "output-pattern", value_name = "PATTERN")]
    pub output_pattern: Option<String>,

    /// Locale for textual month names in the output pattern.
    #[arg(long = "output-locale", value_name = "LOCALE", value_parser = parse_locale)]
    pub output_locale: Option<LocaleId>,

    /// Input pattern with its locale, ordered; first match wins.
    /// May be repeated. A bare pattern defaults to the "en" locale.
    #[arg(
        long = "input-pattern",
        value_name = "PATTERN@LOCALE",
        value_parser = parse_input_pattern
    )]
    pub input_patterns: Vec<DatePattern>,

    /// Replacement term for input that matches no pattern.
    #[arg(long = "default-value", value_name = "TERM")]
    pub default_value: Option<String>,

    /// Treat the whole input as a single term instead of one per line.
    #[arg(long = "raw")]
    pub raw: bool,

    /// Suppress the summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct PatternsArgs {
    /// JSON file with a full normalizer configuration.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_locale(value: &str) -> Result<LocaleId, String> {
    value.parse::<LocaleId>().map_err(|error| error.to_string())
}

/// Parse `PATTERN@LOCALE` (locale optional) into a `DatePattern`.
fn parse_input_pattern(value: &str) -> Result<DatePattern, String> {
    match value.rsplit_once('@') {
        Some((pattern, locale)) => {
            let locale = locale
                .parse::<LocaleId>()
                .map_err(|error| error.to_string())?;
            Ok(DatePattern::new(pattern, locale))
        }
        None => Ok(DatePattern::new(value, LocaleId::En)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_pattern_flag_splits_on_last_at_sign() {
        let parsed = parse_input_pattern("dd 'de' MMMM 'de' yyyy@pt").unwrap();
        assert_eq!(parsed.pattern, "dd 'de' MMMM 'de' yyyy");
        assert_eq!(parsed.locale, LocaleId::Pt);
    }

    #[test]
    fn bare_input_pattern_defaults_to_english() {
        let parsed = parse_input_pattern("MM/dd/yyyy").unwrap();
        assert_eq!(parsed.locale, LocaleId::En);
    }

    #[test]
    fn unknown_locale_is_a_flag_error() {
        assert!(parse_input_pattern("MM/dd/yyyy@xx").is_err());
        assert!(parse_locale("xx").is_err());
    }
}
