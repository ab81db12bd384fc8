//! RHTMX Validation WASM
//!
//! WebAssembly bindings for RHTMX validation.
//! Exposes the field validator as a `Validator` class bound to the current
//! page, plus quick predicates from the core library.

use rhtmx_validation_core as core;
use rhtmx_validation_core::phone::{Country, PhoneKind};
use wasm_bindgen::prelude::*;

pub mod dom;
#[cfg(feature = "console_log")]
pub mod logging;
pub mod rules;
pub mod validator;

pub use dom::{WebDocument, WebElement, WebListener};
pub use validator::JsValidator;

/// Set panic hook for better error messages in the browser and, with
/// `console_log`, send tracing events to the console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    logging::init_console_logging(tracing::Level::DEBUG);
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Quick password validation; returns the failure message, if any
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(password: &str, pattern: &str) -> Option<String> {
    core::validate_password(password, pattern).err()
}

/// Quick URL validation
#[wasm_bindgen(js_name = isValidUrl)]
pub fn is_valid_url_js(url: &str) -> bool {
    core::is_valid_url(url)
}

#[wasm_bindgen(js_name = isTruthy)]
pub fn is_truthy_js(value: &str) -> bool {
    core::is_truthy(value)
}

#[wasm_bindgen(js_name = isFalsy)]
pub fn is_falsy_js(value: &str) -> bool {
    core::is_falsy(value)
}

/// Phone validation by country ISO code (`"CL"`, `"MX"`, ...) and kind
/// (`mobile`, `landline`, `mobile-intl`, `landline-intl`)
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(value: &str, country: &str, kind: &str) -> Result<bool, JsError> {
    let country: Country = country.parse().map_err(|e: String| JsError::new(&e))?;
    let kind: PhoneKind = kind.parse().map_err(|e: String| JsError::new(&e))?;
    Ok(core::phone::is_valid_phone(value, country, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("invalid-email"));
    }

    #[wasm_bindgen_test]
    fn test_password_validation() {
        assert!(validate_password_js("simple", "basic").is_none());
        assert!(validate_password_js("weak", "strong").is_some());
    }

    #[wasm_bindgen_test]
    fn test_url_validation() {
        assert!(is_valid_url_js("https://example.com"));
        assert!(!is_valid_url_js("not-a-url"));
    }

    #[wasm_bindgen_test]
    fn test_boolean_parsing() {
        assert!(is_truthy_js("Sí"));
        assert!(is_falsy_js("no"));
        assert!(!is_truthy_js("maybe"));
    }

    #[wasm_bindgen_test]
    fn test_phone_validation() {
        assert!(matches!(is_valid_phone_js("+56912345678", "CL", "mobile-intl"), Ok(true)));
        assert!(matches!(is_valid_phone_js("12", "CL", "mobile"), Ok(false)));
        assert!(is_valid_phone_js("912345678", "XX", "mobile").is_err());
    }
}
