// File: src/store.rs
// Purpose: Ordered store of field errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A failed rule: the field it belongs to and the rule's message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Insertion-ordered collection of [`FieldError`]s
///
/// Errors of one field can be dropped without touching the others, which is
/// what per-field re-validation relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorStore {
    errors: Vec<FieldError>,
}

impl ErrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = FieldError>) {
        self.errors.extend(errors);
    }

    /// Drop every error of `field`, returning how many were removed
    pub fn remove_field(&mut self, field: &str) -> usize {
        let before = self.errors.len();
        self.errors.retain(|e| e.field != field);
        before - self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First error across all fields, in insertion order
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn to_vec(&self) -> Vec<FieldError> {
        self.errors.clone()
    }
}

impl<'a> IntoIterator for &'a ErrorStore {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
