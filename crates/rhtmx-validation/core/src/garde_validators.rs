//! Custom garde validators for email domain checks
//!
//! These follow garde's `custom(...)` validator signature so they can be
//! attached to server-side structs as well as called from the boolean
//! predicates in [`crate::email`].

/// Static list of public email domains
///
/// Common free email providers that business forms may want to reject in
/// favor of company addresses.
pub static PUBLIC_DOMAINS: &[&str] = &[
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

/// Validator: Block public email domains
///
/// # Example
///
/// ```ignore
/// use garde::Validate;
///
/// #[derive(Validate)]
/// struct BusinessForm {
///     #[garde(email, custom(no_public_email))]
///     email: String,
/// }
/// ```
pub fn no_public_email(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    let domain = extract_domain(value).to_lowercase();

    if PUBLIC_DOMAINS.iter().any(|&d| d == domain) {
        return Err(garde::Error::new("public email domains are not allowed"));
    }

    Ok(())
}

/// Validator: Block specific email domains (case-insensitive)
pub fn blocked_domain_validator(value: &str, blocked: &[String]) -> Result<(), garde::Error> {
    let domain = extract_domain(value);

    if blocked.iter().any(|d| d.eq_ignore_ascii_case(domain)) {
        return Err(garde::Error::new("this email domain is blocked"));
    }

    Ok(())
}

/// Validator: Require one exact email domain (case-insensitive)
pub fn required_domain_validator(value: &str, domain: &str) -> Result<(), garde::Error> {
    let (local, actual) = match value.split_once('@') {
        Some(parts) => parts,
        None => return Err(garde::Error::new("email address has no domain")),
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) || actual.contains('@') {
        return Err(garde::Error::new("email address is malformed"));
    }

    if !actual.eq_ignore_ascii_case(domain) {
        return Err(garde::Error::new(format!("email must belong to {}", domain)));
    }

    Ok(())
}

/// Domain part of an email address, empty when there is no `@`
fn extract_domain(email: &str) -> &str {
    email.split_once('@').map(|(_, d)| d).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_public_email() {
        assert!(no_public_email("user@company.com", &()).is_ok());
        assert!(no_public_email("user@gmail.com", &()).is_err());
        assert!(no_public_email("user@GMAIL.com", &()).is_err());
    }

    #[test]
    fn test_blocked_domain() {
        let blocked = vec!["spam.net".to_string()];
        assert!(blocked_domain_validator("a@spam.net", &blocked).is_err());
        assert!(blocked_domain_validator("a@Spam.Net", &blocked).is_err());
        assert!(blocked_domain_validator("a@ham.net", &blocked).is_ok());
    }

    #[test]
    fn test_required_domain() {
        assert!(required_domain_validator("ana@acme.cl", "acme.cl").is_ok());
        assert!(required_domain_validator("ana@ACME.cl", "acme.cl").is_ok());
        assert!(required_domain_validator("ana@other.cl", "acme.cl").is_err());
        assert!(required_domain_validator("@acme.cl", "acme.cl").is_err());
        assert!(required_domain_validator("acme.cl", "acme.cl").is_err());
    }
}
