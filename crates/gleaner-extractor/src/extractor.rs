//! Core Extractor implementation

use crate::bind::bind;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::locate::locate_candidate;
use crate::repair::repair_and_parse;
use crate::scrape::scrape;
use crate::types::ExtractionResult;
use gleaner_domain::{FieldSchema, Record, Tier};
use tracing::{debug, warn};

/// The Extractor recovers a structured record from a raw LLM reply
///
/// The pipeline is pure and synchronous: it performs no I/O, holds no
/// shared state, and is safe to call concurrently from many tasks.
/// Retrying a failed LLM call is the caller's responsibility, guided by
/// the tier on the result.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Verify a schema declaration before wiring it into a call site
    pub fn verify_schema(schema: &FieldSchema) -> Result<(), ExtractorError> {
        schema.validate().map_err(ExtractorError::Schema)
    }

    /// Recover a record for `schema` from a raw reply
    ///
    /// Runs locate, repair-and-parse, and bind in order, stopping at
    /// the first success; failures fall through to the plain-text
    /// scraper. Never fails: when nothing is recoverable the result is
    /// a `Default`-tier record built entirely from schema defaults.
    pub fn extract(&self, raw: &str, schema: &FieldSchema) -> ExtractionResult {
        debug!(
            "extracting '{}' record from {} chars",
            schema.name,
            raw.len()
        );

        let failure = match locate_candidate(raw) {
            Some(candidate) => match repair_and_parse(candidate, &self.config) {
                Some(parsed) => {
                    let diagnostic = parsed
                        .repair
                        .map(|step| format!("parsed after repair: {}", step));
                    if let Some(step) = parsed.repair {
                        debug!("'{}' candidate parsed after repair: {}", schema.name, step);
                    }
                    return ExtractionResult {
                        record: bind(&parsed.value, schema),
                        tier: parsed.tier,
                        diagnostic,
                    };
                }
                None => "candidate did not parse after repairs",
            },
            None => "no JSON object found in reply",
        };

        if !self.config.text_fallback {
            warn!(
                "{}; text fallback disabled, returning '{}' defaults",
                failure, schema.name
            );
            return ExtractionResult {
                record: Record::defaults(schema),
                tier: Tier::Default,
                diagnostic: Some(format!("{}; text fallback disabled", failure)),
            };
        }

        let scraped = scrape(raw, schema);
        if scraped.recovered > 0 {
            warn!(
                "{}; recovered {} field(s) of '{}' from plain text",
                failure, scraped.recovered, schema.name
            );
            ExtractionResult {
                record: scraped.record,
                tier: Tier::HeuristicText,
                diagnostic: Some(format!(
                    "{}; scraped {} labeled field(s)",
                    failure, scraped.recovered
                )),
            }
        } else {
            warn!(
                "{}; no labeled fields found, returning '{}' defaults",
                failure, schema.name
            );
            ExtractionResult {
                record: scraped.record,
                tier: Tier::Default,
                diagnostic: Some(format!("{}; no labeled fields found", failure)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gleaner_domain::schema;

    #[test]
    fn test_exact_json_has_no_diagnostic() {
        let extractor = Extractor::default();
        let result = extractor.extract(r#"{"title": "Eng"}"#, &schema::JD_FIELDS);
        assert_eq!(result.tier, Tier::ExactJson);
        assert!(result.diagnostic.is_none());
    }

    #[test]
    fn test_repaired_json_names_the_repair() {
        let extractor = Extractor::default();
        let result = extractor.extract(r#"{"title": "Eng""#, &schema::JD_FIELDS);
        assert_eq!(result.tier, Tier::RepairedJson);
        assert!(result.diagnostic.unwrap().contains("balanced braces"));
    }

    #[test]
    fn test_fallback_disabled_goes_straight_to_defaults() {
        let extractor = Extractor::new(ExtractorConfig::strict());
        let result = extractor.extract("Score: 8. Feedback: fine.", &schema::EVALUATION);
        assert_eq!(result.tier, Tier::Default);
        assert_eq!(result.record, Record::defaults(&schema::EVALUATION));
    }

    #[test]
    fn test_verify_schema_accepts_builtins() {
        for schema in [
            &schema::QUESTION_SET,
            &schema::EVALUATION,
            &schema::RESUME_FIELDS,
            &schema::JD_FIELDS,
        ] {
            assert!(Extractor::verify_schema(schema).is_ok());
        }
    }
}
