//! OCR token model.

use serde::{Deserialize, Serialize};

/// One recognized text fragment from an OCR result, with a fixed position
/// in reading order.
///
/// Token sequences are consumed exactly as the OCR service returns them.
/// By contract with that service, the first element of a sequence is the
/// *entire* detected text block; subsequent elements are individual words
/// in reading order. Consumers must not reorder or deduplicate the
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token {
    /// Raw recognized text. May contain letters, digits and punctuation.
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whether the raw text is a pure digit string: non-empty and composed
    /// solely of ASCII decimal digits.
    pub fn is_digits(&self) -> bool {
        !self.text.is_empty() && self.text.bytes().all(|b| b.is_ascii_digit())
    }

    /// The raw text with every non-digit character removed. May be empty.
    pub fn digits(&self) -> String {
        self.text.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Case-insensitive prefix match against an already-lowercased keyword.
    pub(crate) fn starts_with_keyword(&self, keyword: &str) -> bool {
        self.text.to_lowercase().starts_with(keyword)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self { text }
    }
}
