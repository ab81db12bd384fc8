//! Text shape predicates and transforms

use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url regex is valid"));

/// Non-blank after trimming
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// At least `min` characters, ignoring surrounding whitespace
pub fn min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// At most `max` characters
pub fn max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Exactly `n` characters
pub fn exact_length(value: &str, n: usize) -> bool {
    value.chars().count() == n
}

/// Validates string length, returning a displayable reason
pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), String> {
    let len = s.chars().count();
    if len >= min && len <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {} characters", min, max))
    }
}

/// ASCII letters only, non-empty
pub fn letters_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// ASCII letters and whitespace, non-empty
pub fn letters_and_spaces(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// ASCII letters and digits, non-empty
pub fn alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// ASCII letters, digits and whitespace, non-empty
pub fn no_special_chars(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
}

pub fn no_whitespace(value: &str) -> bool {
    !value.chars().any(char::is_whitespace)
}

pub fn contains(value: &str, substring: &str) -> bool {
    value.contains(substring)
}

/// At least `min` whitespace-separated words
pub fn min_words(value: &str, min: usize) -> bool {
    value.split_whitespace().count() >= min
}

/// Exact membership in an allowed list
pub fn in_list(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Parses as any JSON document
pub fn is_json(value: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(value).is_ok()
}

/// Matches a caller-supplied regex; an invalid pattern never matches
pub fn matches_pattern(value: &str, pattern: &str) -> bool {
    Regex::new(pattern).map(|re| re.is_match(value)).unwrap_or(false)
}

/// `http://` or `https://` URL with a host
pub fn is_valid_url(url: &str) -> bool {
    URL.is_match(url)
}

pub fn is_https_url(url: &str) -> bool {
    url.starts_with("https://")
}

/// Uppercases the first character
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercases the first character of every space-separated word
pub fn capitalize_words(value: &str) -> String {
    value
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases, then capitalizes every word except `exceptions` (the first
/// word is always capitalized)
pub fn capitalize_words_except(value: &str, exceptions: &[&str]) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && exceptions.iter().any(|e| e.eq_ignore_ascii_case(word)) {
                word.to_string()
            } else {
                capitalize_first(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert!(required(" a "));
        assert!(!required("   "));
        assert!(min_length("  abc  ", 3));
        assert!(!min_length("  ab  ", 3));
        assert!(max_length("ñandú", 5));
        assert!(exact_length("abcd", 4));
        assert!(validate_length("hello", 3, 10).is_ok());
        assert!(validate_length("hi", 3, 10).is_err());
    }

    #[test]
    fn test_shapes() {
        assert!(letters_only("Hola"));
        assert!(!letters_only("Hola1"));
        assert!(!letters_only(""));
        assert!(letters_and_spaces("Hola Mundo"));
        assert!(alphanumeric("abc123"));
        assert!(!alphanumeric("abc 123"));
        assert!(no_special_chars("abc 123"));
        assert!(!no_special_chars("abc_123"));
        assert!(no_whitespace("abc"));
        assert!(!no_whitespace("a c"));
        assert!(min_words(" uno  dos tres ", 3));
        assert!(!min_words("uno", 2));
        assert!(in_list("b", &["a", "b"]));
        assert!(contains("hello world", "world"));
    }

    #[test]
    fn test_json_and_patterns() {
        assert!(is_json(r#"{"a": 1}"#));
        assert!(is_json("[1,2]"));
        assert!(!is_json("{a: 1}"));
        assert!(matches_pattern("abc", "^[a-c]+$"));
        assert!(!matches_pattern("abc", "(["));
    }

    #[test]
    fn test_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://test.co.uk/path?q=1"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("example.com"));
        assert!(is_https_url("https://example.com"));
        assert!(!is_https_url("http://example.com"));
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(capitalize_first("hola"), "Hola");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_words("hola mundo"), "Hola Mundo");
        assert_eq!(
            capitalize_words_except("JUAN DE LA CRUZ", &["de", "la"]),
            "Juan de la Cruz"
        );
    }
}
