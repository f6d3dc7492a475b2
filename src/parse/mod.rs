//! Free-text parsers for lab values and reference ranges.
//!
//! Upstream exam records carry numbers as display strings ("11.3 g/dL",
//! "70 - 100 mg/dL"). These parsers extract the numeric parts and are total:
//! unparseable input degrades to a documented default instead of erroring,
//! and it is the caller's job to present that default meaningfully.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::ReferenceRange;

static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s*-\s*(\d+\.?\d*)").unwrap());

static NUMBER_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(\d+(\.\d*)?|\.\d+)").unwrap());

/// Extract the first `<number> - <number>` pair from a reference-range string.
///
/// Whitespace around the dash is tolerated, as is arbitrary text around the
/// pair (units, currency symbols, annotations). When no pair matches, the
/// fallback range `{0, 100}` is returned. A reversed pair is normalized so
/// that `min <= max` always holds.
pub fn parse_reference_range(text: &str) -> ReferenceRange {
    let Some(caps) = RANGE_RE.captures(text) else {
        return ReferenceRange::DEFAULT;
    };

    // Both captures are plain unsigned decimals by construction; a parse
    // failure here would mean the regex matched something it cannot have.
    let a: f64 = match caps[1].parse() {
        Ok(v) => v,
        Err(_) => return ReferenceRange::DEFAULT,
    };
    let b: f64 = match caps[2].parse() {
        Ok(v) => v,
        Err(_) => return ReferenceRange::DEFAULT,
    };

    if a <= b {
        ReferenceRange { min: a, max: b }
    } else {
        ReferenceRange { min: b, max: a }
    }
}

/// Extract a numeric magnitude from a measured-value string.
///
/// Everything that is not a digit, a decimal point, or a minus sign is
/// stripped first (unit suffixes, percent signs, separators), then the
/// numeric prefix of what remains is parsed, including forms like `.5` and
/// `-.5`. A remainder that does not start with a number yields `0.0`; this
/// function never fails.
pub fn parse_value(text: &str) -> f64 {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    NUMBER_PREFIX_RE
        .find(&stripped)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_with_unit_suffix() {
        let r = parse_reference_range("70 - 100 mg/dL");
        assert_eq!(r.min, 70.0);
        assert_eq!(r.max, 100.0);
    }

    #[test]
    fn range_with_decimals_and_tight_dash() {
        let r = parse_reference_range("12.0-15.5 g/dL");
        assert_eq!(r.min, 12.0);
        assert_eq!(r.max, 15.5);
    }

    #[test]
    fn range_with_surrounding_text() {
        let r = parse_reference_range("adult reference: 0.6 - 1.2 (serum)");
        assert_eq!(r.min, 0.6);
        assert_eq!(r.max, 1.2);
    }

    #[test]
    fn range_falls_back_when_unparseable() {
        assert_eq!(parse_reference_range("invalid"), ReferenceRange::DEFAULT);
        assert_eq!(parse_reference_range(""), ReferenceRange::DEFAULT);
        assert_eq!(parse_reference_range("negative only"), ReferenceRange::DEFAULT);
    }

    #[test]
    fn reversed_range_is_normalized() {
        let r = parse_reference_range("100 - 70");
        assert!(r.min <= r.max);
        assert_eq!(r.min, 70.0);
        assert_eq!(r.max, 100.0);
    }

    #[test]
    fn value_with_unit() {
        assert_eq!(parse_value("11.3 g/dL"), 11.3);
        assert_eq!(parse_value("92 mg/dL"), 92.0);
        assert_eq!(parse_value("45%"), 45.0);
    }

    #[test]
    fn negative_value() {
        assert_eq!(parse_value("-2.5 SD"), -2.5);
    }

    #[test]
    fn value_with_leading_decimal_point() {
        assert_eq!(parse_value(".5 g/dL"), 0.5);
        assert_eq!(parse_value("-.5"), -0.5);
    }

    #[test]
    fn value_with_stripped_separator() {
        // The comma is stripped before parsing, so this is 1500, not 1.
        assert_eq!(parse_value("1,500"), 1500.0);
    }

    #[test]
    fn value_without_number_degrades_to_zero() {
        assert_eq!(parse_value("abc"), 0.0);
        assert_eq!(parse_value(""), 0.0);
        assert_eq!(parse_value("--"), 0.0);
        assert_eq!(parse_value("--5"), 0.0);
        assert_eq!(parse_value("."), 0.0);
    }
}
