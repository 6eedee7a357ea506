//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration for the extraction pipeline
///
/// Each repair step can be switched off individually; with everything
/// off, only replies that parse as-is earn a JSON tier and the rest fall
/// straight through to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Strip ASCII control characters before re-parsing
    pub strip_control_chars: bool,

    /// Append or remove unmatched closing braces
    pub balance_braces: bool,

    /// Close an unterminated string at end of input
    pub balance_quotes: bool,

    /// Maximum unmatched braces the repairer will add or remove
    pub max_brace_repairs: usize,

    /// Scrape labeled fields from plain text when JSON recovery fails
    pub text_fallback: bool,
}

impl Default for ExtractorConfig {
    /// Default configuration: every repair tier enabled
    fn default() -> Self {
        Self {
            strip_control_chars: true,
            balance_braces: true,
            balance_quotes: true,
            max_brace_repairs: 32,
            text_fallback: true,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: accept only replies that parse as-is
    ///
    /// Malformed replies skip every repair and the text fallback, so
    /// they surface as `Default`-tier records the caller can reject.
    pub fn strict() -> Self {
        Self {
            strip_control_chars: false,
            balance_braces: false,
            balance_quotes: false,
            max_brace_repairs: 0,
            text_fallback: false,
        }
    }

    /// Lenient preset: a larger brace budget for badly truncated replies
    pub fn lenient() -> Self {
        Self {
            max_brace_repairs: 128,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.balance_braces && self.max_brace_repairs == 0 {
            return Err(ExtractorError::Config(
                "max_brace_repairs must be greater than 0 when balance_braces is enabled"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
