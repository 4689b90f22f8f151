//! Digit string validation and decimal scaling.

/// Whether `s` is a pure digit string: non-empty and composed solely of
/// ASCII decimal digits. An empty string is never numeric.
pub fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Remove every non-digit character from `s`. May return an empty string.
pub fn strip_non_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a candidate digit string against the expected digit count and
/// scale it to a reading.
///
/// A candidate of exactly `expected_digits` digits is divided by
/// `10^decimals`. A candidate one digit short is accepted when
/// `decimals > 0` and divided by `10^(decimals - 1)`, compensating for a
/// dropped leading digit on the display. Anything else is no match.
pub fn scale_digits(digits: &str, expected_digits: u32, decimals: u32) -> Option<f64> {
    if !is_digit_string(digits) {
        return None;
    }

    // All-ASCII digit strings, so byte length equals digit count.
    let len = digits.len() as u32;
    let value: f64 = digits.parse().ok()?;

    if len == expected_digits {
        Some(value / 10f64.powi(decimals as i32))
    } else if decimals > 0 && len + 1 == expected_digits {
        Some(value / 10f64.powi(decimals as i32 - 1))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_digit_string() {
        assert!(is_digit_string("00123"));
        assert!(is_digit_string("0"));
        assert!(!is_digit_string(""));
        assert!(!is_digit_string("12 34"));
        assert!(!is_digit_string("-123"));
    }

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("00123 kWh"), "00123");
        assert_eq!(strip_non_digits("--"), "");
        assert_eq!(strip_non_digits("a1b2c3"), "123");
    }

    #[test]
    fn test_exact_length_scaling() {
        assert_eq!(scale_digits("12345", 5, 2), Some(123.45));
        assert_eq!(scale_digits("00123", 5, 2), Some(1.23));
        assert_eq!(scale_digits("12345", 5, 0), Some(12345.0));
    }

    #[test]
    fn test_one_digit_short_scales_with_reduced_divisor() {
        assert_eq!(scale_digits("1234", 5, 2), Some(12.34));
        assert_eq!(scale_digits("1234", 5, 1), Some(1234.0));
    }

    #[test]
    fn test_shortfall_requires_decimals() {
        assert_eq!(scale_digits("1234", 5, 0), None);
    }

    #[test]
    fn test_wrong_lengths_rejected() {
        assert_eq!(scale_digits("123", 5, 2), None);
        assert_eq!(scale_digits("123456", 5, 2), None);
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(scale_digits("", 5, 2), None);
        assert_eq!(scale_digits("12a45", 5, 2), None);
    }

    #[test]
    fn test_zero_reading_is_a_value() {
        assert_eq!(scale_digits("00000", 5, 2), Some(0.0));
    }
}
