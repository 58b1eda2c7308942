//! Text input and display helpers for front ends.
//!
//! Users type percentages ("12.5") and counts ("10"). Parsing never fails on
//! its own: an unusable percentage becomes NaN and an unusable count becomes
//! `None`, and the calculator's own validation then reports the error kind
//! that belongs to that field.

/// Convert a percentage string to a fraction, `"12.5"` → `0.125`.
///
/// Surrounding whitespace and a trailing `%` are accepted. Anything that does
/// not parse as a number yields NaN.
#[must_use]
pub fn parse_percent(text: &str) -> f64 {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    number.parse::<f64>().map_or(f64::NAN, |value| value / 100.0)
}

/// Parse a non-negative whole number.
///
/// Negative numbers, fractions and other text yield `None`. Zero parses;
/// rejecting it is left to the calculator.
#[must_use]
pub fn parse_count(text: &str) -> Option<u64> {
    text.trim().parse::<u64>().ok()
}

/// Parse a signed whole number (outcome counts may be negative on input).
#[must_use]
pub fn parse_signed(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Render a probability as a percentage with `decimals` places, `0.6513` → `"65.1%"`.
#[must_use]
pub fn format_percent(probability: f64, decimals: u32) -> String {
    format!("{:.*}%", decimals as usize, probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("50"), 0.5);
        assert_eq!(parse_percent("12.5"), 0.125);
        assert_eq!(parse_percent(" 100 "), 1.0);
        assert_eq!(parse_percent("25%"), 0.25);
        assert_eq!(parse_percent("0"), 0.0);
    }

    #[test]
    fn test_parse_percent_out_of_range_passes_through() {
        assert!((parse_percent("110") - 1.1).abs() < 1e-12);
        assert!((parse_percent("-10") + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_parse_percent_garbage_is_nan() {
        assert!(parse_percent("").is_nan());
        assert!(parse_percent("abc").is_nan());
        assert!(parse_percent("%").is_nan());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("10"), Some(10));
        assert_eq!(parse_count(" 0 "), Some(0));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("1.5"), None);
        assert_eq!(parse_count("ten"), None);
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_signed("-3"), Some(-3));
        assert_eq!(parse_signed("7"), Some(7));
        assert_eq!(parse_signed("2.0"), None);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.651_321_559_9, 1), "65.1%");
        assert_eq!(format_percent(1.0, 1), "100.0%");
        assert_eq!(format_percent(0.0, 1), "0.0%");
        assert_eq!(format_percent(0.5, 0), "50%");
        assert_eq!(format_percent(0.123_4, 2), "12.34%");
    }
}
