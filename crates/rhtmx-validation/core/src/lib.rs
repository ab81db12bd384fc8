//! RHTMX Validation Core
//!
//! Pure predicate functions used by the form validator, both natively and
//! from the WASM client. Every predicate takes the extracted field value as
//! `&str` (plus optional arguments) and answers `true` when the value is
//! acceptable. Predicates own their emptiness semantics: none of them treat
//! an empty string as "not applicable".

pub mod boolean;
pub mod date;
pub mod dni;
pub mod email;
pub mod name;
pub mod numeric;
pub mod password;
pub mod phone;
pub mod string;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export the flat predicates; country/format specific ones stay namespaced
pub use boolean::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
