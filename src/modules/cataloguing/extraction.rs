// Variant-specific field extraction
//
// These are heuristics over free text controlled by the upstream database.
// Split points, suffix literals and the FSK pattern are part of the export
// contract; a mismatch yields an empty value, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::bindings::BindingTable;
use crate::models::Value;

static FSK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"FSK (.+?) freigegeben").unwrap());

const DURATION_SUFFIX: &str = " Min";
const PAGE_SUFFIX: &str = " S";
const ANTOLIN_PREFIX: &str = "Antolin";
const MOVIE_MARKERS: [&str; 2] = [" DVD", " Blu-ray"];

/// Running time from `"<desc>. <N> Min."`
pub fn duration(text: Option<&str>) -> Value {
    let Some(text) = text else {
        return Value::Empty;
    };

    let last = text
        .trim()
        .trim_end_matches('.')
        .split('.')
        .next_back()
        .unwrap_or_default()
        .trim();

    match last.strip_suffix(DURATION_SUFFIX) {
        Some(minutes) => Value::from(minutes.trim()),
        None => Value::Empty,
    }
}

/// Page count from `"."`-delimited physical description clauses
pub fn page_count(text: Option<&str>) -> Value {
    let Some(text) = text else {
        return Value::Empty;
    };

    text.split('.')
        .map(str::trim)
        .find(|clause| clause.ends_with(PAGE_SUFFIX))
        .and_then(|clause| {
            clause
                .split_whitespace()
                .find(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        })
        .map(Value::from)
        .unwrap_or_default()
}

/// Binding label; unknown codes pass through trimmed
pub fn binding(code: Option<&str>, table: &BindingTable) -> Value {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => Value::from(table.lookup(code).unwrap_or(code)),
        None => Value::Empty,
    }
}

/// Antolin reading level, e.g. `"Antolin (3. Klasse)"` → `"3. Klasse"`
pub fn antolin(topics: &[String]) -> Value {
    topics
        .iter()
        .find(|topic| topic.starts_with(ANTOLIN_PREFIX))
        .and_then(|topic| {
            let start = topic.find('(')?;
            let end = topic.rfind(')')?;
            (end > start).then(|| topic[start + 1..end].trim().to_string())
        })
        .map(Value::from)
        .unwrap_or_default()
}

/// Age rating from `"FSK <rating> freigegeben"` → `"<rating> Jahren"`
pub fn fsk_age(text: Option<&str>) -> Value {
    text.and_then(|t| FSK_PATTERN.captures(t))
        .and_then(|caps| caps.get(1))
        .map(|rating| Value::from(format!("{} Jahren", rating.as_str().trim())))
        .unwrap_or_default()
}

/// Whether a movie's author/title field marks the disc rather than a person
pub fn suppresses_authors(author_title: Option<&str>) -> bool {
    author_title.is_some_and(|text| MOVIE_MARKERS.iter().any(|marker| text.contains(marker)))
}
