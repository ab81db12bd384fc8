// File: src/value.rs
// Purpose: Extract a comparable value from a field's element group

use crate::dom::{ElementHandle, InputKind};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Current value of a field
///
/// Serializes untagged, so the JavaScript side sees a plain string, a
/// string-or-null, or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text input, textarea or select
    Single(String),
    /// Value of the checked radio, `None` when nothing is checked
    Radio(Option<String>),
    /// Values of every checked box of the group
    Checkbox(Vec<String>),
}

impl FieldValue {
    /// Textual view used by string predicates
    ///
    /// An unchecked radio group reads as `""`, a checkbox group as its
    /// checked values joined by `,`.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Single(s) => Cow::Borrowed(s),
            FieldValue::Radio(Some(s)) => Cow::Borrowed(s),
            FieldValue::Radio(None) => Cow::Borrowed(""),
            FieldValue::Checkbox(values) => Cow::Owned(values.join(",")),
        }
    }

    /// Nothing entered: blank text, no radio checked, no box checked
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Single(s) => s.trim().is_empty(),
            FieldValue::Radio(selected) => selected.is_none(),
            FieldValue::Checkbox(values) => values.is_empty(),
        }
    }

    /// Number of selected entries (1 for non-empty text)
    pub fn selected_count(&self) -> usize {
        match self {
            FieldValue::Checkbox(values) => values.len(),
            other if other.is_empty() => 0,
            _ => 1,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.to_string())
    }
}

/// Read the value of an element group
///
/// The first element decides the shape: radios yield the checked value,
/// checkboxes the checked values, anything else the first element's value
/// (trimmed when `trim` is set). An empty group reads as an empty string.
pub fn extract<E: ElementHandle>(elements: &[E], trim: bool) -> FieldValue {
    let Some(first) = elements.first() else {
        return FieldValue::Single(String::new());
    };

    match first.kind() {
        InputKind::Radio => FieldValue::Radio(
            elements
                .iter()
                .find(|e| e.is_checked())
                .map(|e| e.value()),
        ),
        InputKind::Checkbox => FieldValue::Checkbox(
            elements
                .iter()
                .filter(|e| e.is_checked())
                .map(|e| e.value())
                .collect(),
        ),
        _ => {
            let raw = first.value();
            if trim {
                FieldValue::Single(raw.trim().to_string())
            } else {
                FieldValue::Single(raw)
            }
        }
    }
}
