//! RHTMX Validator
//!
//! Binds named form fields to ordered `(predicate, message)` rules, keeps a
//! per-field error store and surfaces errors through a configurable output
//! channel (inline messages, an HTML panel, alert, console or plain data).
//!
//! The engine never touches a browser directly. It talks to the page through
//! the [`Document`] / [`ElementHandle`] traits, implemented by
//! [`MemoryDocument`] for native use and tests, and by `WebDocument` in the
//! `rhtmx-validation-wasm` crate.
//!
//! # Example
//!
//! ```
//! use rhtmx_validator::prelude::*;
//!
//! let doc = MemoryDocument::new();
//! doc.add_input("email", "not-an-email");
//!
//! let mut validator = Validator::new(doc.clone(), OutputKind::Array, ValidatorConfig::default());
//! validator.register_field(
//!     "email",
//!     vec![
//!         RuleDecl::new(rules::required, "Email is required"),
//!         RuleDecl::new(rules::text(predicates::is_valid_email), "Invalid email"),
//!     ],
//! );
//!
//! assert!(!validator.validate_all().unwrap());
//! assert_eq!(validator.errors()[0].message, "Invalid email");
//! ```

pub mod config;
pub mod dom;
pub mod error;
mod evaluator;
pub mod memory;
mod registry;
mod render;
pub mod rules;
pub mod store;
pub mod tracker;
pub mod validator;
pub mod value;

pub use config::{EvaluationMode, OutputKind, ValidatorConfig};
pub use dom::{Document, ElementHandle, EventHandler, FieldEvent, InputKind, UnloadHandler};
pub use error::{PredicateError, Result, ValidatorError};
pub use memory::{ElementSpec, MemoryDocument, MemoryElement, MessageNode};
pub use rules::{Declaration, Rule, RuleAdder, RuleDecl};
pub use store::{ErrorStore, FieldError};
pub use tracker::FormTracker;
pub use validator::Validator;
pub use value::FieldValue;

/// Re-export of the predicate library
pub use rhtmx_validation_core as predicates;

pub mod prelude {
    pub use crate::predicates;
    pub use crate::rules;
    pub use crate::{
        Declaration, Document, ElementHandle, ElementSpec, EvaluationMode, FieldError, FieldEvent,
        FieldValue, FormTracker, InputKind, MemoryDocument, OutputKind, PredicateError, Rule, RuleDecl,
        Validator, ValidatorConfig, ValidatorError,
    };
}
