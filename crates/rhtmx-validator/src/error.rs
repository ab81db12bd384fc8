// File: src/error.rs
// Purpose: Error types for validator configuration and rule execution

/// Error raised by a rule predicate that could not run
///
/// This is not a validation failure: a predicate that answers `false`
/// produces a [`FieldError`](crate::FieldError). A `PredicateError` means the
/// rule itself is broken (a host callback threw, a bad argument, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PredicateError {
    message: String,
}

impl PredicateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    /// Output kind outside the supported set
    #[error("unknown output kind '{0}' (expected array, html, inputs, console, alert or short-circuit)")]
    UnknownOutputKind(String),

    #[error("unknown evaluation mode '{0}' (expected short-circuit or accumulate)")]
    UnknownEvaluationMode(String),

    /// Options could not be deserialized
    #[error("invalid validator options: {0}")]
    Config(#[from] serde_json::Error),

    /// A rule predicate failed to run while validating `field`
    #[error("rule for field '{field}' failed: {source}")]
    Predicate {
        field: String,
        #[source]
        source: PredicateError,
    },
}

pub type Result<T, E = ValidatorError> = std::result::Result<T, E>;
