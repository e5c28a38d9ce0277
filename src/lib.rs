//! Azure document translator
//!
//! Translates a text field of many documents through the Azure Translator
//! service:
//! - Delimiter-priority chunking bounded by configurable size thresholds
//! - One sequential pipeline per document, bounded parallelism across documents
//! - Per-document outcomes aggregated into a batch result
//! - Cost estimation from the configured price per million characters

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
