//! Core library for OCR meter reading extraction.
//!
//! This crate provides:
//! - Token models for recognized OCR text fragments
//! - The value extraction algorithm (keyword anchoring, digit validation,
//!   decimal scaling)
//! - Per-source extraction configuration
//! - A caller-side store retaining the last successful reading

pub mod error;
pub mod extract;
pub mod models;
pub mod store;

pub use error::{ConfigError, MeterscanError, Result};
pub use extract::{ScanReport, ValueExtractor};
pub use models::config::{ExtractorConfig, KeywordPosition, MeterscanConfig, SourceConfig};
pub use models::token::Token;
pub use store::{Reading, ReadingStore};
