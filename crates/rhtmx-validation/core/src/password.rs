//! Password predicates

use regex::Regex;

/// Password strength tiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordPattern {
    /// 6+ characters minimum
    Basic,
    /// 8+ chars with uppercase, lowercase, and digit
    Medium,
    /// 8+ chars with uppercase, lowercase, digit, and special character
    Strong,
    /// Custom regex pattern
    Custom(String),
}

impl PasswordPattern {
    /// Parse a password pattern from a string
    ///
    /// # Examples
    /// ```
    /// use rhtmx_validation_core::password::PasswordPattern;
    /// assert_eq!(PasswordPattern::parse("basic"), PasswordPattern::Basic);
    /// assert_eq!(PasswordPattern::parse("strong"), PasswordPattern::Strong);
    /// assert_eq!(PasswordPattern::parse("^[a-z]+$"), PasswordPattern::Custom("^[a-z]+$".into()));
    /// ```
    pub fn parse(pattern: &str) -> Self {
        match pattern {
            "basic" => PasswordPattern::Basic,
            "medium" => PasswordPattern::Medium,
            "strong" => PasswordPattern::Strong,
            custom => PasswordPattern::Custom(custom.to_string()),
        }
    }
}

/// Validates a password against a tier, returning the first unmet requirement
///
/// Any pattern other than `basic`/`medium`/`strong` is compiled as a regex.
pub fn validate_password(password: &str, pattern: &str) -> Result<(), String> {
    match PasswordPattern::parse(pattern) {
        PasswordPattern::Basic => first_failure(&[(
            password.chars().count() >= 6,
            "Password must be at least 6 characters",
        )]),
        PasswordPattern::Medium => first_failure(&[
            (password.chars().count() >= 8, "Password must be at least 8 characters"),
            (has_upper(password), "Password must contain uppercase letter"),
            (has_lower(password), "Password must contain lowercase letter"),
            (has_digit(password), "Password must contain digit"),
        ]),
        PasswordPattern::Strong => first_failure(&[
            (password.chars().count() >= 8, "Password must be at least 8 characters"),
            (has_upper(password), "Password must contain at least one uppercase letter"),
            (has_lower(password), "Password must contain at least one lowercase letter"),
            (has_digit(password), "Password must contain at least one digit"),
            (has_special(password), "Password must contain at least one special character"),
        ]),
        PasswordPattern::Custom(source) => match Regex::new(&source) {
            Ok(re) if re.is_match(password) => Ok(()),
            Ok(_) => Err("Password does not match the required pattern".to_string()),
            Err(e) => Err(format!("Invalid password pattern: {}", e)),
        },
    }
}

fn first_failure(checks: &[(bool, &str)]) -> Result<(), String> {
    checks
        .iter()
        .find(|(valid, _)| !valid)
        .map(|(_, msg)| Err(msg.to_string()))
        .unwrap_or(Ok(()))
}

fn has_upper(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lower(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

fn has_special(s: &str) -> bool {
    s.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// At least `min` characters
pub fn password_min_length(password: &str, min: usize) -> bool {
    password.chars().count() >= min
}

/// Only ASCII letters and digits, non-empty
pub fn password_alphanumeric(password: &str) -> bool {
    !password.is_empty() && password.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Contains a letter, a digit and a non-alphanumeric character
pub fn letters_digits_special(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_alphabetic()) && has_digit(password) && has_special(password)
}

/// `min`+ characters with lowercase, uppercase, digit and special character
pub fn strong_password(password: &str, min: usize) -> bool {
    password_min_length(password, min)
        && has_lower(password)
        && has_upper(password)
        && has_digit(password)
        && has_special(password)
}

/// Confirmation check: both entries must be identical
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}
