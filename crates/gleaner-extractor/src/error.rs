//! Error types for the extractor
//!
//! Extraction itself never fails: every input yields a record and a
//! tier. Errors are confined to the configuration and schema edges.

use thiserror::Error;

/// Errors that can occur while setting up an extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schema declaration error
    #[error("Schema error: {0}")]
    Schema(String),
}
