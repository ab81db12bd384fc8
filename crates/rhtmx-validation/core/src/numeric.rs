//! Numeric predicates over text input

use std::fmt::Display;

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whole number (`"12"`, `"-3"`, `"4.0"`)
pub fn is_integer(value: &str) -> bool {
    parse_number(value).map(|n| n.fract() == 0.0).unwrap_or(false)
}

/// Number written with a decimal point (`"12.5"`)
pub fn is_decimal(value: &str) -> bool {
    parse_number(value).is_some() && value.contains('.')
}

/// Parses and is `>= min`
pub fn number_min(value: &str, min: f64) -> bool {
    parse_number(value).map(|n| n >= min).unwrap_or(false)
}

/// Parses and is `<= max`
pub fn number_max(value: &str, max: f64) -> bool {
    parse_number(value).map(|n| n <= max).unwrap_or(false)
}

/// Parses and lies in `[min, max]`
pub fn number_range(value: &str, min: f64, max: f64) -> bool {
    parse_number(value).map(|n| n >= min && n <= max).unwrap_or(false)
}

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

/// Validates maximum value for numeric types
pub fn validate_max<T: PartialOrd + Display>(value: T, max: T) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {}", max))
    }
}

/// Validates value is within range
pub fn validate_range<T: PartialOrd + Display>(value: T, min: T, max: T) -> Result<(), String> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {}", min, max))
    }
}
