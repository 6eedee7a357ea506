//! Result types for extraction

use gleaner_domain::{Record, Tier};

/// Result of an extraction operation
///
/// The tier is never omitted: callers distinguish a confidently parsed
/// record from a best-effort guess by inspecting it, and may treat the
/// lower tiers as a hard error if they choose to.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The populated record
    pub record: Record,

    /// How the record was obtained
    pub tier: Tier,

    /// Why a lower tier was used, when one was
    pub diagnostic: Option<String>,
}

impl ExtractionResult {
    /// Whether the record came from parsed JSON (exact or repaired)
    pub fn is_json(&self) -> bool {
        self.tier.is_json()
    }
}
