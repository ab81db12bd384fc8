//! Boolean-ish text parsing

/// "true", "1", "y", "yes", "s", "si", "sí" (case-insensitive)
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "y" | "yes" | "s" | "si" | "sí"
    )
}

/// "false", "0", "n", "no" (case-insensitive)
pub fn is_falsy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "n" | "no")
}
