//! Locate the JSON candidate inside a raw LLM reply
//!
//! LLMs wrap JSON in prose, markdown code fences, or both; this module
//! finds the substring most likely to contain the object the prompt
//! asked for.

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Find the substring of `raw` most likely to contain a JSON object
///
/// Returns `None` when no opening brace exists anywhere in the text;
/// the caller falls through to the plain-text scraper with the whole
/// reply.
pub(crate) fn locate_candidate(raw: &str) -> Option<&str> {
    let start = find_object_start(raw)?;
    let end = find_object_end(raw, start);
    Some(trim_trailing_fence(&raw[start..end]))
}

/// Find the index of the opening brace of the candidate
///
/// Prefers a brace outside any code fence, then the first brace after a
/// `json`-tagged fence, then the first brace after any fence.
fn find_object_start(raw: &str) -> Option<usize> {
    if let Some(idx) = first_unfenced_brace(raw) {
        return Some(idx);
    }
    for fence in [JSON_FENCE, FENCE] {
        if let Some(fence_idx) = raw.find(fence) {
            let body = fence_idx + fence.len();
            if let Some(rel) = raw[body..].find('{') {
                return Some(body + rel);
            }
        }
    }
    None
}

/// First `{` that sits outside every triple-backtick fence
fn first_unfenced_brace(raw: &str) -> Option<usize> {
    let mut offset = 0;
    let mut fenced = false;
    for segment in raw.split(FENCE) {
        if !fenced {
            if let Some(rel) = segment.find('{') {
                return Some(offset + rel);
            }
        }
        offset += segment.len() + FENCE.len();
        fenced = !fenced;
    }
    None
}

/// Scan forward from `start`, returning the index one past the brace
/// that closes the candidate, or the end of the text if the depth never
/// returns to zero.
///
/// Every brace counts as structural, including any inside string
/// literals. A literal brace in a string value can cut the candidate
/// short; the repair and fallback tiers absorb that case.
fn find_object_end(raw: &str, start: usize) -> usize {
    let mut depth: i32 = 0;
    for (idx, byte) in raw.as_bytes().iter().enumerate().skip(start) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return idx + 1;
                }
            }
            _ => {}
        }
    }
    raw.len()
}

/// Drop a trailing code-fence marker left on an unterminated candidate
fn trim_trailing_fence(candidate: &str) -> &str {
    let trimmed = candidate.trim_end();
    trimmed.strip_suffix(FENCE).map_or(trimmed, str::trim_end)
}
