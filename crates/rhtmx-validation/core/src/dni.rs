//! National identity number predicates (Chilean RUN/RUT)

use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{7,8}$").expect("regex is valid"));
static WITH_VERIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{7,8}[0-9kK]$").expect("regex is valid"));
static WITH_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{7,8}-[0-9kK]$").expect("regex is valid"));
static FULL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\.[0-9]{3}\.[0-9]{3}-[0-9kK]$").expect("regex is valid"));

/// `12345678`
pub fn run_digits_only(value: &str) -> bool {
    DIGITS_ONLY.is_match(value)
}

/// `12345678K`
pub fn run_with_verifier(value: &str) -> bool {
    WITH_VERIFIER.is_match(value)
}

/// `12345678-K`
pub fn run_with_dash(value: &str) -> bool {
    WITH_DASH.is_match(value)
}

/// `12.345.678-K`
pub fn run_full(value: &str) -> bool {
    FULL.is_match(value)
}

/// Verifies the modulo-11 check digit of a RUN in any of the accepted formats
pub fn run_check_digit_valid(value: &str) -> bool {
    if !(run_with_verifier(value) || run_with_dash(value) || run_full(value)) {
        return false;
    }

    let cleaned: String = value.chars().filter(|c| *c != '.' && *c != '-').collect();
    let (body, verifier) = cleaned.split_at(cleaned.len() - 1);

    let sum: u32 = body
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .zip([2, 3, 4, 5, 6, 7].into_iter().cycle())
        .map(|(d, factor)| d * factor)
        .sum();

    let expected = match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10).unwrap_or('?'),
    };

    verifier.eq_ignore_ascii_case(&expected.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert!(run_digits_only("12345678"));
        assert!(!run_digits_only("123456"));
        assert!(run_with_verifier("12345678k"));
        assert!(run_with_dash("12345678-5"));
        assert!(!run_with_dash("12345678"));
        assert!(run_full("12.345.678-5"));
        assert!(!run_full("12345678-5"));
    }

    #[test]
    fn test_check_digit() {
        assert!(run_check_digit_valid("12.345.678-5"));
        assert!(run_check_digit_valid("12345678-5"));
        assert!(run_check_digit_valid("123456785"));
        assert!(!run_check_digit_valid("12345678-4"));
        assert!(run_check_digit_valid("10000013-K"));
        assert!(run_check_digit_valid("10000013-k"));
        assert!(!run_check_digit_valid("12345678"));
    }
}
