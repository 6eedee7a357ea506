//! Gleaner Domain Layer
//!
//! This crate contains the core vocabulary for tolerant structured-output
//! recovery. It has ZERO external dependencies and defines the fundamental
//! concepts and value objects that the pipeline layer depends upon.
//!
//! ## Key Concepts
//!
//! - **FieldSchema**: static declaration of one target record shape
//! - **Record**: a populated record conforming to a schema
//! - **Tier**: confidence level of a recovered record
//!   (exact_json > repaired_json > heuristic_text > default)
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure value objects only
//! - The recovery pipeline lives in `gleaner-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod schema;
pub mod tier;

// Re-exports for convenience
pub use record::{FieldValue, Record};
pub use schema::{FieldKind, FieldSchema, FieldSpec};
pub use tier::Tier;
