// File: src/evaluator.rs
// Purpose: Run a field's rule chain and update the error store

use crate::config::{EvaluationMode, OutputKind, ValidatorConfig};
use crate::dom::{Document, ElementHandle};
use crate::error::{Result, ValidatorError};
use crate::registry::FieldEntry;
use crate::store::{ErrorStore, FieldError};
use crate::value;

/// Evaluate one field and record its errors
///
/// The field's previous errors are dropped first, so re-running is
/// idempotent and other fields' errors are never touched. Element classes
/// are toggled here rather than at render time, except for the `array`
/// kind which never touches the page.
///
/// A predicate that fails to run aborts the evaluation with
/// [`ValidatorError::Predicate`]; the field then has no recorded errors.
pub(crate) fn evaluate_field<D: Document>(
    entry: &FieldEntry<D>,
    store: &mut ErrorStore,
    config: &ValidatorConfig,
    kind: OutputKind,
) -> Result<bool> {
    store.remove_field(&entry.name);

    let value = value::extract(&entry.elements, config.trim_values);
    let mode = config.mode_for(kind);
    let mut errors = Vec::new();

    for (index, rule) in entry.rules.iter().enumerate() {
        let passed = rule.check(&value).map_err(|source| ValidatorError::Predicate {
            field: entry.name.clone(),
            source,
        })?;

        tracing::trace!(field = %entry.name, rule = index, passed, "rule evaluated");

        if !passed {
            errors.push(FieldError::new(&entry.name, rule.message()));
            if mode == EvaluationMode::ShortCircuit {
                break;
            }
        }
    }

    let valid = errors.is_empty();
    if kind.writes_to_dom() {
        mark_elements(&entry.elements, valid, config);
    }
    store.extend(errors);

    Ok(valid)
}

fn mark_elements<E: ElementHandle>(elements: &[E], valid: bool, config: &ValidatorConfig) {
    let (add, remove) = if valid {
        (&config.input_success_class, &config.input_error_class)
    } else {
        (&config.input_error_class, &config.input_success_class)
    };

    for element in elements {
        element.remove_class(remove);
        element.add_class(add);
    }
}
