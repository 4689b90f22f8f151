//! Value extraction from OCR token sequences.

mod digits;
mod scanner;

pub use digits::{is_digit_string, scale_digits, strip_non_digits};
pub use scanner::{ScanReport, ValueExtractor};
