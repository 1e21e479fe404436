//! Month-name tables per locale.
//!
//! Tables are stored lowercase and matched against lowercased input.
//! Formatting re-applies each locale's casing convention (English and German
//! capitalize month names; the Romance locales do not).

use datelex_model::LocaleId;

const EN_FULL: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];
const EN_ABBREV: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const PT_FULL: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];
const PT_ABBREV: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

const ES_FULL: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];
const ES_ABBREV: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

const FR_FULL: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];
const FR_ABBREV: [&str; 12] = [
    "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août", "sept", "oct", "nov", "déc",
];

const DE_FULL: [&str; 12] = [
    "januar",
    "februar",
    "märz",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "dezember",
];
const DE_ABBREV: [&str; 12] = [
    "jan", "feb", "mär", "apr", "mai", "jun", "jul", "aug", "sep", "okt", "nov", "dez",
];

const IT_FULL: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];
const IT_ABBREV: [&str; 12] = [
    "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
];

fn month_table(locale: LocaleId, abbreviated: bool) -> &'static [&'static str; 12] {
    match (locale, abbreviated) {
        (LocaleId::En, false) => &EN_FULL,
        (LocaleId::En, true) => &EN_ABBREV,
        (LocaleId::Pt, false) => &PT_FULL,
        (LocaleId::Pt, true) => &PT_ABBREV,
        (LocaleId::Es, false) => &ES_FULL,
        (LocaleId::Es, true) => &ES_ABBREV,
        (LocaleId::Fr, false) => &FR_FULL,
        (LocaleId::Fr, true) => &FR_ABBREV,
        (LocaleId::De, false) => &DE_FULL,
        (LocaleId::De, true) => &DE_ABBREV,
        (LocaleId::It, false) => &IT_FULL,
        (LocaleId::It, true) => &IT_ABBREV,
    }
}

fn capitalizes_months(locale: LocaleId) -> bool {
    matches!(locale, LocaleId::En | LocaleId::De)
}

/// Match a month name at the start of `input` (already lowercased).
///
/// Returns the month number (1-12) and the remaining input. The longest
/// matching name wins, so names sharing a prefix cannot shadow each other.
pub(crate) fn match_month(
    input: &str,
    locale: LocaleId,
    abbreviated: bool,
) -> Option<(u32, &str)> {
    let table = month_table(locale, abbreviated);
    let mut best: Option<(u32, usize)> = None;
    for (index, name) in table.iter().enumerate() {
        if input.starts_with(name) && best.is_none_or(|(_, len)| name.len() > len) {
            best = Some((index as u32 + 1, name.len()));
        }
    }
    best.map(|(month, len)| (month, &input[len..]))
}

/// Render a month name for output, applying the locale's casing convention.
///
/// `month` must be in 1..=12 (guaranteed by the calendar library).
pub(crate) fn display_month(locale: LocaleId, month: u32, abbreviated: bool) -> String {
    let name = month_table(locale, abbreviated)[month as usize - 1];
    if capitalizes_months(locale) {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        name.to_string()
    }
}
