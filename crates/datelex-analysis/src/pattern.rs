//! Date-format pattern compilation, strict matching, and formatting.
//!
//! Patterns use the date-format syntax the configuration surface has always
//! carried: `y`/`yyyy` year, `yy` two-digit year, `M`/`MM` month number,
//! `MMM` abbreviated month name, `MMMM` (or longer) full month name,
//! `d`/`dd` day, `H`/`HH` hour, `m`/`mm` minute, `s`/`ss` second,
//! `'...'` quoted literals (`''` is a literal quote), and any other
//! non-letter character as a literal separator.
//!
//! A pattern is compiled once, at configuration time; compilation is the
//! validation step that rejects bad patterns before any token is processed.
//! The compiled form drives both strict input matching and output
//! formatting, so a shape that parses is always a shape that can be
//! formatted back.
//!
//! Matching is strict by design: every field and literal must match and the
//! entire input must be consumed. Partial matches that would silently accept
//! trailing garbage are treated as misses. Calendar validity (month lengths,
//! leap years) is delegated to `chrono`.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use datelex_model::LocaleId;

use crate::error::PatternError;
use crate::locale;

/// One element of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternItem {
    /// Four-digit year (`y`, `yyyy`).
    Year4,
    /// Two-digit year (`yy`), pivoted into 1970..=2069.
    Year2,
    /// Numeric month (`M`, `MM`).
    MonthNumber { padded: bool },
    /// Textual month name (`MMM` abbreviated, `MMMM`+ full).
    MonthName { abbreviated: bool },
    /// Day of month (`d`, `dd`).
    Day { padded: bool },
    /// Hour of day, 24h (`H`, `HH`).
    Hour { padded: bool },
    /// Minute (`m`, `mm`).
    Minute { padded: bool },
    /// Second (`s`, `ss`).
    Second { padded: bool },
    /// Literal text that must appear verbatim (matched case-insensitively).
    Literal(String),
}

/// A validated, immutable date-format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    items: Vec<PatternItem>,
}

impl CompiledPattern {
    /// Compile a pattern string, validating its syntax.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        let chars: Vec<char> = pattern.chars().collect();
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    // '' outside a quoted section is a literal quote
                    literal.push('\'');
                    i += 2;
                    continue;
                }
                let start = i;
                i += 1;
                let mut closed = false;
                while i < chars.len() {
                    if chars[i] == '\'' {
                        if chars.get(i + 1) == Some(&'\'') {
                            literal.push('\'');
                            i += 2;
                        } else {
                            closed = true;
                            i += 1;
                            break;
                        }
                    } else {
                        literal.push(chars[i]);
                        i += 1;
                    }
                }
                if !closed {
                    return Err(PatternError::UnterminatedQuote { position: start });
                }
            } else if c.is_ascii_alphabetic() {
                flush_literal(&mut items, &mut literal);
                let start = i;
                while i < chars.len() && chars[i] == c {
                    i += 1;
                }
                let count = i - start;
                items.push(field_item(c, count, start)?);
            } else {
                literal.push(c);
                i += 1;
            }
        }
        flush_literal(&mut items, &mut literal);
        Ok(Self {
            source: pattern.to_string(),
            items,
        })
    }

    /// The pattern string this was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled item sequence.
    #[must_use]
    pub fn items(&self) -> &[PatternItem] {
        &self.items
    }

    /// Whether the pattern carries a year field.
    #[must_use]
    pub fn has_year(&self) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, PatternItem::Year4 | PatternItem::Year2))
    }

    /// Strictly match `input` (already lowercased) against this pattern.
    ///
    /// Returns `None` unless every item matches and the whole input is
    /// consumed. Fields absent from the pattern default to January, the
    /// 1st, and midnight; a pattern without a year field never matches.
    #[must_use]
    pub fn parse(&self, input: &str, locale: LocaleId) -> Option<NaiveDateTime> {
        let mut rest = input;
        let mut year = None;
        let mut month = None;
        let mut day = None;
        let mut hour = None;
        let mut minute = None;
        let mut second = None;
        for item in &self.items {
            match item {
                PatternItem::Year4 => {
                    let (value, tail) = take_digits(rest, 4, 4)?;
                    year = Some(value as i32);
                    rest = tail;
                }
                PatternItem::Year2 => {
                    let (value, tail) = take_digits(rest, 2, 2)?;
                    year = Some(pivot_two_digit_year(value));
                    rest = tail;
                }
                PatternItem::MonthNumber { .. } => {
                    let (value, tail) = take_digits(rest, 1, 2)?;
                    month = Some(value);
                    rest = tail;
                }
                PatternItem::MonthName { abbreviated } => {
                    let (value, tail) = locale::match_month(rest, locale, *abbreviated)?;
                    month = Some(value);
                    rest = tail;
                }
                PatternItem::Day { .. } => {
                    let (value, tail) = take_digits(rest, 1, 2)?;
                    day = Some(value);
                    rest = tail;
                }
                PatternItem::Hour { .. } => {
                    let (value, tail) = take_digits(rest, 1, 2)?;
                    hour = Some(value);
                    rest = tail;
                }
                PatternItem::Minute { .. } => {
                    let (value, tail) = take_digits(rest, 1, 2)?;
                    minute = Some(value);
                    rest = tail;
                }
                PatternItem::Second { .. } => {
                    let (value, tail) = take_digits(rest, 1, 2)?;
                    second = Some(value);
                    rest = tail;
                }
                PatternItem::Literal(text) => {
                    rest = strip_literal(rest, text)?;
                }
            }
        }
        if !rest.is_empty() {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(year?, month.unwrap_or(1), day.unwrap_or(1))?;
        let time =
            NaiveTime::from_hms_opt(hour.unwrap_or(0), minute.unwrap_or(0), second.unwrap_or(0))?;
        Some(date.and_time(time))
    }

    /// Render `when` through this pattern.
    #[must_use]
    pub fn format(&self, when: NaiveDateTime, locale: LocaleId) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                PatternItem::Year4 => out.push_str(&format!("{:04}", when.year())),
                PatternItem::Year2 => {
                    out.push_str(&format!("{:02}", when.year().rem_euclid(100)));
                }
                PatternItem::MonthNumber { padded } => push_number(&mut out, when.month(), *padded),
                PatternItem::MonthName { abbreviated } => {
                    out.push_str(&locale::display_month(locale, when.month(), *abbreviated));
                }
                PatternItem::Day { padded } => push_number(&mut out, when.day(), *padded),
                PatternItem::Hour { padded } => push_number(&mut out, when.hour(), *padded),
                PatternItem::Minute { padded } => push_number(&mut out, when.minute(), *padded),
                PatternItem::Second { padded } => push_number(&mut out, when.second(), *padded),
                PatternItem::Literal(text) => out.push_str(text),
            }
        }
        out
    }
}

fn field_item(letter: char, count: usize, position: usize) -> Result<PatternItem, PatternError> {
    let item = match letter {
        'y' => {
            if count == 2 {
                PatternItem::Year2
            } else {
                PatternItem::Year4
            }
        }
        'M' => match count {
            1 => PatternItem::MonthNumber { padded: false },
            2 => PatternItem::MonthNumber { padded: true },
            3 => PatternItem::MonthName { abbreviated: true },
            _ => PatternItem::MonthName { abbreviated: false },
        },
        'd' => PatternItem::Day { padded: count > 1 },
        'H' => PatternItem::Hour { padded: count > 1 },
        'm' => PatternItem::Minute { padded: count > 1 },
        's' => PatternItem::Second { padded: count > 1 },
        other => {
            return Err(PatternError::UnsupportedField {
                letter: other,
                position,
            });
        }
    };
    Ok(item)
}

fn flush_literal(items: &mut Vec<PatternItem>, literal: &mut String) {
    if !literal.is_empty() {
        items.push(PatternItem::Literal(std::mem::take(literal)));
    }
}

/// Take between `min` and `max` leading ASCII digits, greedily.
fn take_digits(input: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let available = input.bytes().take_while(u8::is_ascii_digit).count();
    if available < min {
        return None;
    }
    let taken = available.min(max);
    let value = input[..taken].parse().ok()?;
    Some((value, &input[taken..]))
}

/// Strip a literal from the input, matching case-insensitively.
fn strip_literal<'a>(input: &'a str, literal: &str) -> Option<&'a str> {
    // the input is lowercased by the caller; lowercase the literal to match
    input.strip_prefix(literal.to_lowercase().as_str())
}

/// `yy` pivot: 00-69 land in 2000-2069, 70-99 in 1970-1999.
fn pivot_two_digit_year(value: u32) -> i32 {
    if value < 70 {
        2000 + value as i32
    } else {
        1900 + value as i32
    }
}

fn push_number(out: &mut String, value: u32, padded: bool) {
    if padded {
        out.push_str(&format!("{value:02}"));
    } else {
        out.push_str(&format!("{value}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn compiles_numeric_pattern() {
        let compiled = CompiledPattern::compile("dd-MM-yyyy").unwrap();
        assert_eq!(
            compiled.items(),
            &[
                PatternItem::Day { padded: true },
                PatternItem::Literal("-".to_string()),
                PatternItem::MonthNumber { padded: true },
                PatternItem::Literal("-".to_string()),
                PatternItem::Year4,
            ]
        );
    }

    #[test]
    fn compiles_quoted_literals() {
        let compiled = CompiledPattern::compile("dd 'de' MMMM 'de' yyyy").unwrap();
        assert_eq!(
            compiled.items()[1],
            PatternItem::Literal(" de ".to_string())
        );
        assert_eq!(
            compiled.items()[2],
            PatternItem::MonthName { abbreviated: false }
        );
    }

    #[test]
    fn six_letter_month_run_is_a_full_name() {
        // historical configurations carry MMMMMM; any run past three Ms
        // means the full month name
        let compiled = CompiledPattern::compile("dd 'de' MMMMMM 'de' yyyy").unwrap();
        assert!(
            compiled
                .items()
                .contains(&PatternItem::MonthName { abbreviated: false })
        );
    }

    #[test]
    fn escaped_quote_becomes_literal_quote() {
        let compiled = CompiledPattern::compile("yyyy''MM").unwrap();
        assert_eq!(compiled.items()[1], PatternItem::Literal("'".to_string()));
    }

    #[test]
    fn rejects_empty_pattern() {
        assert_eq!(CompiledPattern::compile(""), Err(PatternError::Empty));
    }

    #[test]
    fn rejects_unsupported_field() {
        assert_eq!(
            CompiledPattern::compile("dd-MM-qqqq"),
            Err(PatternError::UnsupportedField {
                letter: 'q',
                position: 6
            })
        );
    }

    #[test]
    fn rejects_unterminated_quote() {
        assert_eq!(
            CompiledPattern::compile("dd 'de MMMM"),
            Err(PatternError::UnterminatedQuote { position: 3 })
        );
    }

    #[test]
    fn parses_us_numeric_date() {
        let compiled = CompiledPattern::compile("MM/dd/yyyy").unwrap();
        assert_eq!(
            compiled.parse("03/29/2017", LocaleId::En),
            Some(date(2017, 3, 29))
        );
    }

    #[test]
    fn parses_single_digit_fields() {
        let compiled = CompiledPattern::compile("M/d/yyyy").unwrap();
        assert_eq!(
            compiled.parse("3/9/2017", LocaleId::En),
            Some(date(2017, 3, 9))
        );
    }

    #[test]
    fn parses_portuguese_long_form() {
        let compiled = CompiledPattern::compile("dd 'de' MMMM 'de' yyyy").unwrap();
        assert_eq!(
            compiled.parse("29 de março de 2017", LocaleId::Pt),
            Some(date(2017, 3, 29))
        );
    }

    #[test]
    fn parses_compact_pattern_without_separators() {
        let compiled = CompiledPattern::compile("yyyyMMdd").unwrap();
        assert_eq!(
            compiled.parse("20240115", LocaleId::En),
            Some(date(2024, 1, 15))
        );
    }

    #[test]
    fn parses_datetime_fields() {
        let compiled = CompiledPattern::compile("yyyy-MM-dd HH:mm:ss").unwrap();
        let parsed = compiled.parse("2024-01-15 10:30:45", LocaleId::En).unwrap();
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.second(), 45);
    }

    #[test]
    fn rejects_trailing_garbage() {
        let compiled = CompiledPattern::compile("MM/dd/yyyy").unwrap();
        assert_eq!(compiled.parse("03/29/2017x", LocaleId::En), None);
        assert_eq!(compiled.parse("03/29/20170", LocaleId::En), None);
    }

    #[test]
    fn rejects_partial_input() {
        let compiled = CompiledPattern::compile("MM/dd/yyyy").unwrap();
        assert_eq!(compiled.parse("03/29", LocaleId::En), None);
    }

    #[test]
    fn rejects_calendar_impossible_dates() {
        let compiled = CompiledPattern::compile("MM/dd/yyyy").unwrap();
        assert_eq!(compiled.parse("02/30/2017", LocaleId::En), None);
        assert_eq!(compiled.parse("13/01/2017", LocaleId::En), None);
    }

    #[test]
    fn two_digit_year_pivots() {
        let compiled = CompiledPattern::compile("MM/dd/yy").unwrap();
        assert_eq!(
            compiled.parse("03/29/17", LocaleId::En),
            Some(date(2017, 3, 29))
        );
        assert_eq!(
            compiled.parse("03/29/85", LocaleId::En),
            Some(date(1985, 3, 29))
        );
    }

    #[test]
    fn formats_with_padding() {
        let compiled = CompiledPattern::compile("dd-MM-yyyy").unwrap();
        assert_eq!(compiled.format(date(2017, 3, 9), LocaleId::En), "09-03-2017");
        let unpadded = CompiledPattern::compile("d/M/yyyy").unwrap();
        assert_eq!(unpadded.format(date(2017, 3, 9), LocaleId::En), "9/3/2017");
    }

    #[test]
    fn formats_month_names_per_locale() {
        let compiled = CompiledPattern::compile("dd 'de' MMMM 'de' yyyy").unwrap();
        assert_eq!(
            compiled.format(date(2017, 3, 29), LocaleId::Pt),
            "29 de março de 2017"
        );
        let english = CompiledPattern::compile("MMMM d, yyyy").unwrap();
        assert_eq!(
            english.format(date(2017, 3, 29), LocaleId::En),
            "March 29, 2017"
        );
    }

    #[test]
    fn format_then_parse_recovers_day() {
        let compiled = CompiledPattern::compile("dd-MM-yyyy").unwrap();
        let when = date(2020, 11, 5);
        let rendered = compiled.format(when, LocaleId::En);
        assert_eq!(compiled.parse(&rendered, LocaleId::En), Some(when));
    }

    #[test]
    fn has_year_detects_year_fields() {
        assert!(CompiledPattern::compile("yyyy").unwrap().has_year());
        assert!(CompiledPattern::compile("yy").unwrap().has_year());
        assert!(!CompiledPattern::compile("dd-MM").unwrap().has_year());
    }
}
