//! Lenient number parsing for form fields.
//!
//! Both parsers read the longest numeric prefix after leading whitespace and
//! ignore whatever follows, so `"25.50 USD"` yields `25.5`. Input with no
//! numeric prefix yields NaN (floats) or `None` (integers); callers store that
//! value unchanged. Integer prefixes beyond the `i64` range saturate.

use serde::{Deserialize, Deserializer};

pub fn parse_float_lenient(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return s[..i + "Infinity".len()].parse().unwrap_or(f64::NAN);
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac = j - (i + 1);
        if digits > 0 || frac > 0 {
            digits += frac;
            i = j;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut k = i + 1;
        if k < len && (bytes[k] == b'+' || bytes[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < len && bytes[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            i = k;
        }
    }

    s[..i].parse().unwrap_or(f64::NAN)
}

pub fn parse_int_lenient(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    let negative = bytes.first() == Some(&b'-');
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == start {
        return None;
    }
    // only overflow can fail past this point
    Some(s[..i].parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// JSON cannot carry NaN, so a non-numeric price is written as `null`;
/// read it back as NaN.
pub(crate) fn null_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_prefixes() {
        assert_eq!(parse_float_lenient("25.50"), 25.5);
        assert_eq!(parse_float_lenient("  12abc"), 12.0);
        assert_eq!(parse_float_lenient("-.5"), -0.5);
        assert_eq!(parse_float_lenient("3."), 3.0);
        assert_eq!(parse_float_lenient("1e3x"), 1000.0);
        assert_eq!(parse_float_lenient("2e"), 2.0);
        assert_eq!(parse_float_lenient("Infinity"), f64::INFINITY);
        assert_eq!(parse_float_lenient("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn float_without_prefix_is_nan() {
        assert!(parse_float_lenient("abc").is_nan());
        assert!(parse_float_lenient("").is_nan());
        assert!(parse_float_lenient(".").is_nan());
        assert!(parse_float_lenient("-").is_nan());
    }

    #[test]
    fn int_prefixes() {
        assert_eq!(parse_int_lenient("5"), Some(5));
        assert_eq!(parse_int_lenient(" 4.9"), Some(4));
        assert_eq!(parse_int_lenient("-3 stars"), Some(-3));
        assert_eq!(parse_int_lenient("five"), None);
        assert_eq!(parse_int_lenient("+"), None);
    }

    #[test]
    fn int_overflow_saturates() {
        assert_eq!(parse_int_lenient("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_lenient("-99999999999999999999 stars"), Some(i64::MIN));
    }
}
