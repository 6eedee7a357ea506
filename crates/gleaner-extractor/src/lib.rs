//! Gleaner Extractor
//!
//! Recovers structured records from raw LLM replies, however mangled.
//!
//! # Overview
//!
//! A model asked for JSON may return pure JSON, JSON buried in prose,
//! JSON inside a markdown code fence, or JSON with unbalanced braces
//! and quotes. This crate locates the most plausible JSON candidate,
//! repairs it deterministically, binds it onto a declared schema, and
//! falls back to plain-text label scraping when nothing parses. Every
//! result carries a confidence tier instead of an error.
//!
//! # Architecture
//!
//! ```text
//! Raw reply → Locate → Repair & Parse → Bind → Record + Tier
//!                 ↘ (nothing found / nothing parses)
//!                   Scrape labeled text → Record + Tier
//! ```
//!
//! # Key Features
//!
//! - **Fence and boundary location**: brace-depth scanning across prose
//!   and code fences
//! - **Cumulative syntactic repair**: control-character stripping, brace
//!   balancing, quote closing
//! - **Schema binding**: defaults, trimming, list normalization, range
//!   clamping; binding never fails
//! - **Heuristic fallback**: labeled-field scraping so some answer is
//!   always produced
//!
//! # Example Usage
//!
//! ```
//! use gleaner_domain::{schema, Tier};
//! use gleaner_extractor::{Extractor, ExtractorConfig};
//!
//! let extractor = Extractor::new(ExtractorConfig::default());
//!
//! let reply = "```json\n{\"title\": \"Engineer\", \"company\": \"Acme\"}\n```";
//! let result = extractor.extract(reply, &schema::JD_FIELDS);
//!
//! assert_eq!(result.tier, Tier::ExactJson);
//! assert_eq!(result.record.text("title"), Some("Engineer"));
//!
//! let truncated = "{\"score\": 7, \"feedback\": \"ok\"";
//! let result = extractor.extract(truncated, &schema::EVALUATION);
//!
//! assert_eq!(result.tier, Tier::RepairedJson);
//! assert_eq!(result.record.integer("score"), Some(7));
//! ```

#![warn(missing_docs)]

mod bind;
mod config;
mod error;
mod extractor;
mod locate;
mod prompt;
mod repair;
mod scrape;
mod types;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use prompt::{
    build_evaluation_prompt, build_jd_parse_prompt, build_question_prompt,
    build_resume_parse_prompt,
};
pub use types::ExtractionResult;
