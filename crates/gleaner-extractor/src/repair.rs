//! Syntactic repair of malformed JSON candidates
//!
//! Model replies commonly arrive truncated or lightly mangled: stray
//! control characters, a missing closing brace, an unterminated string.
//! The repairs here are deterministic and textual, applied cumulatively
//! from least to most aggressive, re-parsing after each one. Missing
//! structural punctuation (commas, colons) is never guessed at; that
//! failure class falls through to the plain-text scraper.

use crate::config::ExtractorConfig;
use gleaner_domain::Tier;
use serde_json::Value;
use tracing::debug;

/// A successfully parsed candidate, with the tier it earned
pub(crate) struct Parsed {
    /// The parsed JSON value
    pub value: Value,

    /// `ExactJson` for an as-is parse, `RepairedJson` otherwise
    pub tier: Tier,

    /// The repair step that finally parsed, for diagnostics
    pub repair: Option<&'static str>,
}

/// Try the candidate as-is, then apply the configured repair sequence
/// until it parses or the sequence is exhausted.
pub(crate) fn repair_and_parse(candidate: &str, config: &ExtractorConfig) -> Option<Parsed> {
    if let Ok(value) = serde_json::from_str::<Value>(candidate) {
        return Some(Parsed {
            value,
            tier: Tier::ExactJson,
            repair: None,
        });
    }

    // Each step feeds the next: truncated replies usually carry more
    // than one defect at once.
    let mut text = candidate.to_string();

    if config.strip_control_chars {
        text = strip_control_chars(&text);
        if let Ok(value) = serde_json::from_str::<Value>(&text) {
            return Some(repaired(value, "stripped control characters"));
        }
    }

    if config.balance_braces {
        if let Some(balanced) = balance_braces(&text, config.max_brace_repairs) {
            text = balanced;
            if let Ok(value) = serde_json::from_str::<Value>(&text) {
                return Some(repaired(value, "balanced braces"));
            }
        }
    }

    if config.balance_quotes {
        if let Some(closed) = close_open_string(&text) {
            text = closed;
            if let Ok(value) = serde_json::from_str::<Value>(&text) {
                return Some(repaired(value, "closed unterminated string"));
            }
        }
    }

    debug!(
        "candidate of {} chars did not parse after repairs",
        candidate.len()
    );
    None
}

fn repaired(value: Value, step: &'static str) -> Parsed {
    Parsed {
        value,
        tier: Tier::RepairedJson,
        repair: Some(step),
    }
}

/// Remove ASCII control characters except standard whitespace
fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|&ch| !ch.is_ascii_control() || matches!(ch, '\t' | '\n' | '\r'))
        .collect()
}

/// Even out unmatched braces, within the configured budget
///
/// A positive net depth (more opens than closes) appends that many
/// closers; a negative one removes the truly unmatched closers found
/// scanning from the end. Returns `None` when the braces already
/// balance or the imbalance exceeds the budget.
fn balance_braces(text: &str, budget: usize) -> Option<String> {
    let mut depth: i64 = 0;
    for byte in text.bytes() {
        match byte {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
    }
    if depth == 0 {
        return None;
    }

    let imbalance = depth.unsigned_abs() as usize;
    if imbalance > budget {
        debug!(
            "brace imbalance {} exceeds repair budget {}",
            imbalance, budget
        );
        return None;
    }

    if depth > 0 {
        let mut fixed = String::with_capacity(text.len() + imbalance);
        fixed.push_str(text);
        fixed.push_str(&"}".repeat(imbalance));
        Some(fixed)
    } else {
        Some(remove_extra_closers(text, imbalance))
    }
}

/// Remove up to `excess` closing braces that close nothing
///
/// Scans right to left; a closer is removed only when no unconsumed
/// opener exists to its left, so closers that legitimately match an
/// earlier open survive.
fn remove_extra_closers(text: &str, mut excess: usize) -> String {
    let bytes = text.as_bytes();
    let mut removed = Vec::new();
    for idx in (0..bytes.len()).rev() {
        if excess == 0 {
            break;
        }
        if bytes[idx] == b'}' && !has_matching_open(bytes, idx) {
            removed.push(idx);
            excess -= 1;
        }
    }

    let mut out = String::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        if !removed.contains(&idx) {
            out.push(ch);
        }
    }
    out
}

/// Whether an unconsumed `{` exists to the left of `close_idx`
fn has_matching_open(bytes: &[u8], close_idx: usize) -> bool {
    let mut nested = 0;
    for idx in (0..close_idx).rev() {
        match bytes[idx] {
            b'}' => nested += 1,
            b'{' => {
                if nested == 0 {
                    return true;
                }
                nested -= 1;
            }
            _ => {}
        }
    }
    false
}

/// Append one closing quote when the text ends inside a string literal
///
/// The inside-string flag toggles on every unescaped `"`. Returns
/// `None` when the quotes already balance.
fn close_open_string(text: &str) -> Option<String> {
    let mut inside = false;
    let mut escaped = false;
    for ch in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => inside = !inside,
            _ => {}
        }
    }
    if !inside {
        return None;
    }
    let mut closed = String::with_capacity(text.len() + 1);
    closed.push_str(text);
    closed.push('"');
    Some(closed)
}
