//! Token stream scanner producing a single scaled reading.

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::config::{ExtractorConfig, KeywordPosition};
use crate::models::token::Token;

use super::digits::{is_digit_string, scale_digits};

/// Outcome of one scan over a token sequence.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// The extracted reading, if any token validated.
    pub value: Option<f64>,

    /// Human-readable notes about malformed candidates that were skipped.
    pub diagnostics: Vec<String>,

    /// How many tokens were examined before the scan stopped.
    pub tokens_scanned: usize,
}

impl ScanReport {
    fn empty(tokens_scanned: usize) -> Self {
        Self {
            value: None,
            diagnostics: Vec::new(),
            tokens_scanned,
        }
    }
}

/// Extracts a single scaled numeric reading from an ordered OCR token
/// sequence.
///
/// The scan is a pure function of its inputs: it never mutates the token
/// slice, holds no state between calls, and reports anomalies as
/// diagnostics instead of errors. "Nothing found" is a normal `None`.
#[derive(Debug, Clone)]
pub struct ValueExtractor {
    /// Keyword to anchor on, lowercased at construction.
    keyword: Option<String>,
    position: Option<KeywordPosition>,
    expected_digits: u32,
    decimals: u32,
}

impl ValueExtractor {
    /// Create an extractor with no keyword anchor.
    pub fn new(expected_digits: u32, decimals: u32) -> Self {
        Self {
            keyword: None,
            position: None,
            expected_digits,
            decimals,
        }
    }

    /// Anchor the scan on a keyword appearing before or after the number.
    pub fn with_keyword(mut self, keyword: impl Into<String>, position: KeywordPosition) -> Self {
        self.keyword = Some(keyword.into().to_lowercase());
        self.position = Some(position);
        self
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            keyword: config.keyword.as_deref().map(str::to_lowercase),
            position: config.keyword_position,
            expected_digits: config.expected_digits,
            decimals: config.decimals,
        }
    }

    /// Scan the token sequence and return just the reading.
    pub fn extract(&self, tokens: &[Token]) -> Option<f64> {
        self.scan(tokens).value
    }

    /// Scan the token sequence, collecting diagnostics along the way.
    pub fn scan(&self, tokens: &[Token]) -> ScanReport {
        let report = match (self.position, self.keyword.as_deref()) {
            (None, _) => self.scan_plain(tokens),
            (Some(KeywordPosition::After), Some(keyword)) => self.scan_after(tokens, keyword),
            (Some(KeywordPosition::Before), Some(keyword)) => self.scan_before(tokens, keyword),
            (Some(_), None) => {
                // Contract violation the config layer should have caught.
                // Degrade to "the keyword never matches".
                debug!("keyword_position set without a keyword; nothing can match");
                ScanReport::empty(tokens.len())
            }
        };

        match report.value {
            Some(value) => debug!(value, tokens_scanned = report.tokens_scanned, "reading found"),
            None => debug!(tokens_scanned = report.tokens_scanned, "no reading found"),
        }
        report
    }

    /// No-keyword mode: the first token whose raw text is itself a pure
    /// digit string of a valid length.
    fn scan_plain(&self, tokens: &[Token]) -> ScanReport {
        let mut report = ScanReport::empty(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            if !token.is_digits() {
                continue;
            }
            if let Some(value) = self.validate(&token.text) {
                report.value = Some(value);
                report.tokens_scanned = i + 1;
                break;
            }
        }

        report
    }

    /// `After` mode: the number sits immediately before the keyword, so a
    /// keyword match selects the previous token as the candidate.
    fn scan_after(&self, tokens: &[Token], keyword: &str) -> ScanReport {
        let mut report = ScanReport::empty(tokens.len());
        let mut prev: Option<&Token> = None;

        for (i, token) in tokens.iter().enumerate() {
            if token.starts_with_keyword(keyword) {
                if let Some(candidate) = prev {
                    debug!(candidate = %candidate.text, "keyword matched, trying previous token");
                    let digits = candidate.digits();
                    if is_digit_string(&digits) {
                        if let Some(value) = self.validate(&digits) {
                            report.value = Some(value);
                            report.tokens_scanned = i + 1;
                            break;
                        }
                    } else {
                        self.report_malformed(&mut report, &candidate.text);
                    }
                }
            }
            prev = Some(token);
        }

        report
    }

    /// `Before` mode: once a keyword has been seen, every later token is a
    /// candidate until one validates. The anchor refreshes on each new
    /// keyword occurrence.
    fn scan_before(&self, tokens: &[Token], keyword: &str) -> ScanReport {
        let mut report = ScanReport::empty(tokens.len());
        let mut keyword_seen = false;

        for (i, token) in tokens.iter().enumerate() {
            if keyword_seen {
                debug!(candidate = %token.text, "past keyword, trying token");
                let digits = token.digits();
                if is_digit_string(&digits) {
                    if let Some(value) = self.validate(&digits) {
                        report.value = Some(value);
                        report.tokens_scanned = i + 1;
                        break;
                    }
                } else {
                    self.report_malformed(&mut report, &token.text);
                }
            }
            if token.starts_with_keyword(keyword) {
                keyword_seen = true;
            }
        }

        report
    }

    fn validate(&self, digits: &str) -> Option<f64> {
        scale_digits(digits, self.expected_digits, self.decimals)
    }

    fn report_malformed(&self, report: &mut ScanReport, raw: &str) {
        warn!("candidate is not numeric: {}", raw);
        report
            .diagnostics
            .push(format!("candidate is not numeric: {raw}"));
    }
}
