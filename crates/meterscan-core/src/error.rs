//! Error types for the meterscan-core library.
//!
//! Note that extraction itself never fails: a scan that finds nothing is a
//! normal `None` result, and malformed candidates are reported as scan
//! diagnostics. The error types here cover configuration and I/O only.

use thiserror::Error;

/// Main error type for the meterscan library.
#[derive(Error, Debug)]
pub enum MeterscanError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to extraction configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A keyword position was configured without a keyword to anchor on.
    #[error("keyword_position is set but no keyword was given")]
    KeywordRequired,

    /// The expected digit count must be at least one.
    #[error("expected_digits must be at least 1")]
    ExpectedDigitsZero,

    /// A named source failed validation.
    #[error("source {name}: {inner}")]
    Source {
        name: String,
        #[source]
        inner: Box<ConfigError>,
    },

    /// No source with the requested name exists in the configuration.
    #[error("no source named {0}")]
    UnknownSource(String),
}

/// Result type for the meterscan library.
pub type Result<T> = std::result::Result<T, MeterscanError>;
