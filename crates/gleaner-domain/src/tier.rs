//! Tier module - confidence levels for recovered records

/// Confidence tier of a recovered record
///
/// Every extraction reports how its record was obtained:
/// - ExactJson: the reply parsed as valid JSON on the first attempt
/// - RepairedJson: valid JSON after a deterministic syntactic fix
/// - HeuristicText: fields scraped from labeled plain text
/// - Default: no signal recovered, the record is all schema defaults
///
/// Variants are declared lowest-first so the derived ordering ranks
/// `ExactJson` above all others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// No signal recovered (pure schema defaults)
    Default,

    /// Best-effort label scraping from plain text
    HeuristicText,

    /// Parsed after deterministic syntactic repair
    RepairedJson,

    /// Parsed as-is
    ExactJson,
}

impl Tier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Default => "default",
            Tier::HeuristicText => "heuristic_text",
            Tier::RepairedJson => "repaired_json",
            Tier::ExactJson => "exact_json",
        }
    }

    /// Parse a tier from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Tier::Default),
            "heuristic_text" => Some(Tier::HeuristicText),
            "repaired_json" => Some(Tier::RepairedJson),
            "exact_json" => Some(Tier::ExactJson),
            _ => None,
        }
    }

    /// Whether the record came from parsed JSON (exact or repaired)
    pub fn is_json(&self) -> bool {
        matches!(self, Tier::ExactJson | Tier::RepairedJson)
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tier: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::ExactJson > Tier::RepairedJson);
        assert!(Tier::RepairedJson > Tier::HeuristicText);
        assert!(Tier::HeuristicText > Tier::Default);
    }

    #[test]
    fn test_tier_roundtrip() {
        for tier in [
            Tier::Default,
            Tier::HeuristicText,
            Tier::RepairedJson,
            Tier::ExactJson,
        ] {
            assert_eq!(Tier::parse(tier.as_str()), Some(tier));
        }
    }

    #[test]
    fn test_tier_parse_invalid() {
        assert_eq!(Tier::parse("confident"), None);
        assert!("confident".parse::<Tier>().is_err());
    }

    #[test]
    fn test_is_json() {
        assert!(Tier::ExactJson.is_json());
        assert!(Tier::RepairedJson.is_json());
        assert!(!Tier::HeuristicText.is_json());
        assert!(!Tier::Default.is_json());
    }
}
