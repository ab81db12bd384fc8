//! Email predicates

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Generic `local@domain.tld` shape check
///
/// Deliberately permissive: one `@`, no whitespace, a dot in the domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Checks the address belongs to exactly `domain` (case-insensitive)
pub fn has_domain(email: &str, domain: &str) -> bool {
    #[cfg(feature = "garde")]
    {
        crate::garde_validators::required_domain_validator(email, domain).is_ok()
    }

    #[cfg(not(feature = "garde"))]
    {
        match email.split_once('@') {
            Some((local, actual)) => {
                !local.is_empty()
                    && !local.chars().any(char::is_whitespace)
                    && !actual.contains('@')
                    && actual.eq_ignore_ascii_case(domain)
            }
            None => false,
        }
    }
}

/// Checks if the email domain is a public provider (gmail, yahoo, etc.)
pub fn is_public_domain(email: &str) -> bool {
    #[cfg(feature = "garde")]
    {
        crate::garde_validators::no_public_email(email, &()).is_err()
    }

    #[cfg(not(feature = "garde"))]
    {
        const PUBLIC_DOMAINS: &[&str] = &[
            "gmail.com",
            "yahoo.com",
            "hotmail.com",
            "outlook.com",
            "aol.com",
            "icloud.com",
            "mail.com",
            "protonmail.com",
            "zoho.com",
            "yandex.com",
        ];
        email
            .split_once('@')
            .map(|(_, d)| PUBLIC_DOMAINS.iter().any(|p| p.eq_ignore_ascii_case(d)))
            .unwrap_or(false)
    }
}

/// Checks if the email domain is in the blocked list
pub fn is_blocked_domain(email: &str, blocked: &[String]) -> bool {
    #[cfg(feature = "garde")]
    {
        crate::garde_validators::blocked_domain_validator(email, blocked).is_err()
    }

    #[cfg(not(feature = "garde"))]
    {
        email
            .split_once('@')
            .map(|(_, d)| blocked.iter().any(|b| b.eq_ignore_ascii_case(d)))
            .unwrap_or(false)
    }
}

/// Confirmation check: both entries must be identical
pub fn emails_match(email: &str, confirmation: &str) -> bool {
    email == confirmation
}
