//! Heuristic plain-text field scraping
//!
//! Last resort before giving up: when no JSON can be recovered, scan
//! the raw reply for field names used as labels ("Score: 8") and take
//! whatever follows. Precision is deliberately traded for availability;
//! the caller sees the `HeuristicText` tier and can decide.

use gleaner_domain::{FieldKind, FieldSchema, FieldValue, Record};
use tracing::debug;

/// Outcome of a scraping pass
pub(crate) struct Scraped {
    /// The record, defaults plus whatever was recovered
    pub record: Record,

    /// Number of fields actually recovered
    pub recovered: usize,
}

/// Scan raw text for labeled field markers and recover what can be found
///
/// Scalar fields only; lists have no reliable plain-text shape and keep
/// their defaults.
pub(crate) fn scrape(raw: &str, schema: &FieldSchema) -> Scraped {
    let mut record = Record::defaults(schema);
    let mut recovered = 0;

    for spec in schema.fields {
        match spec.kind {
            FieldKind::Text { .. } => {
                if let Some(found) = scrape_text(raw, spec.key) {
                    record.set(spec.key, FieldValue::Text(found));
                    recovered += 1;
                }
            }
            FieldKind::BoundedInt { min, max, .. } => {
                if let Some(digit) = scrape_digit(raw, spec.key) {
                    record.set(spec.key, FieldValue::Integer(digit.clamp(min, max)));
                    recovered += 1;
                }
            }
            FieldKind::TextList | FieldKind::ItemList { .. } => {}
        }
    }

    debug!(
        "scraped {} of {} fields for '{}'",
        recovered,
        schema.fields.len(),
        schema.name
    );
    Scraped { record, recovered }
}

/// The stretch of text from just after the label to the next blank line
fn label_window<'a>(raw: &'a str, label: &str) -> Option<&'a str> {
    let at = find_ignore_ascii_case(raw, label)?;
    let window = &raw[at + label.len()..];
    let end = window.find("\n\n").unwrap_or(window.len());
    Some(&window[..end])
}

fn scrape_text(raw: &str, label: &str) -> Option<String> {
    let window = label_window(raw, label)?;
    let value = window.trim_start().trim_start_matches(':').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Recover a numeric field as a single base-10 digit
///
/// Only the first digit in the window is read: "10" scrapes as 1 and
/// then clamps like any other out-of-range value.
fn scrape_digit(raw: &str, label: &str) -> Option<i64> {
    let window = label_window(raw, label)?;
    let digit = window.bytes().find(u8::is_ascii_digit)?;
    Some(i64::from(digit - b'0'))
}

/// Byte-wise ASCII-case-insensitive substring search
///
/// Labels are ASCII schema keys, so the returned offset always lands on
/// a character boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
