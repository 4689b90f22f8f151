//! Data models: OCR tokens and extraction configuration.

pub mod config;
pub mod token;

pub use config::{ExtractorConfig, KeywordPosition, MeterscanConfig, SourceConfig};
pub use token::Token;
