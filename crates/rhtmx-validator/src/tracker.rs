// File: src/tracker.rs
// Purpose: Per-form dirty-state tracking

//! [`FormTracker`] snapshots a form's values and tells whether they changed
//! since. Each tracker belongs to one form and is owned by its caller (or by
//! the [`Validator`](crate::Validator) when `autoTrackDirtyState` is set);
//! there is no shared registry of forms.

use crate::dom::{Document, ElementHandle, InputKind};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Separates the values of two controls in a snapshot
const SEPARATOR: char = '\u{1f}';

/// Dirty-state tracker of one form
///
/// Clones share the same snapshot.
#[derive(Clone)]
pub struct FormTracker<D: Document> {
    document: D,
    form_id: String,
    initial: Rc<RefCell<String>>,
}

impl<D: Document> FormTracker<D> {
    /// Start tracking `form_id` from its current values
    pub fn start(document: D, form_id: impl Into<String>) -> Self {
        let form_id = form_id.into();
        let initial = snapshot(&document, &form_id);
        tracing::debug!(form = %form_id, "form tracking started");

        Self {
            document,
            form_id,
            initial: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Snapshot of the form as it is now
    ///
    /// Every control contributes one segment, in document order; unchecked
    /// radios and checkboxes contribute an empty one.
    pub fn current_values(&self) -> String {
        snapshot(&self.document, &self.form_id)
    }

    pub fn has_changes(&self) -> bool {
        *self.initial.borrow() != self.current_values()
    }

    /// Take the current values as the new clean state (after a save)
    pub fn reset(&self) {
        *self.initial.borrow_mut() = self.current_values();
    }

    /// Every `required` control has a value; a required radio is satisfied by
    /// any checked radio of its group
    pub fn is_complete(&self) -> bool {
        let elements = self.document.form_elements(&self.form_id);
        let checked_groups: HashSet<String> = elements
            .iter()
            .filter(|e| e.kind() == InputKind::Radio && e.is_checked())
            .filter_map(|e| e.name())
            .collect();

        elements.iter().filter(|e| e.is_required()).all(|e| match e.kind() {
            InputKind::Radio => e.name().is_some_and(|name| checked_groups.contains(&name)),
            InputKind::Checkbox => e.is_checked(),
            _ => !e.value().trim().is_empty(),
        })
    }

    /// Ask the host to warn before leaving while the form has unsaved
    /// changes; the guard is active as long as the returned listener lives
    pub fn warn_before_unload(&self) -> D::Listener {
        let tracker = self.clone();
        self.document.on_before_unload(Rc::new(move || {
            let dirty = tracker.has_changes();
            if dirty {
                tracing::debug!(form = %tracker.form_id, "unsaved changes on unload");
            }
            dirty
        }))
    }
}

fn snapshot<D: Document>(document: &D, form_id: &str) -> String {
    let mut out = String::new();
    for (index, element) in document.form_elements(form_id).iter().enumerate() {
        if index > 0 {
            out.push(SEPARATOR);
        }
        match element.kind() {
            InputKind::Radio | InputKind::Checkbox => {
                if element.is_checked() {
                    out.push_str(&element.value());
                }
            }
            _ => out.push_str(&element.value()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{ElementSpec, MemoryDocument};

    fn signup() -> MemoryDocument {
        let doc = MemoryDocument::new();
        doc.insert(ElementSpec::new(InputKind::Text).name("user").form("signup").value("ana").required(true));
        doc.insert(ElementSpec::new(InputKind::Text).name("bio").form("signup"));
        doc.insert(ElementSpec::new(InputKind::Radio).name("plan").form("signup").value("free").required(true));
        doc.insert(ElementSpec::new(InputKind::Radio).name("plan").form("signup").value("pro"));
        doc.insert(ElementSpec::new(InputKind::Text).name("other").value("outside"));
        doc
    }

    #[test]
    fn test_detects_and_resets_changes() {
        let doc = signup();
        let tracker = FormTracker::start(doc.clone(), "signup");
        assert!(!tracker.has_changes());

        doc.elements_by_name("bio")[0].set_value("hello");
        assert!(tracker.has_changes());

        tracker.reset();
        assert!(!tracker.has_changes());
    }

    #[test]
    fn test_value_boundaries_are_kept() {
        let doc = MemoryDocument::new();
        let a = doc.insert(ElementSpec::new(InputKind::Text).name("a").form("f").value("ab"));
        let b = doc.insert(ElementSpec::new(InputKind::Text).name("b").form("f").value("c"));
        let tracker = FormTracker::start(doc.clone(), "f");

        a.set_value("a");
        b.set_value("bc");

        assert!(tracker.has_changes());
    }

    #[test]
    fn test_fields_outside_the_form_are_ignored() {
        let doc = signup();
        let tracker = FormTracker::start(doc.clone(), "signup");

        doc.elements_by_name("other")[0].set_value("changed");

        assert!(!tracker.has_changes());
    }

    #[test]
    fn test_is_complete() {
        let doc = signup();
        let tracker = FormTracker::start(doc.clone(), "signup");
        assert!(!tracker.is_complete());

        let pro = doc.elements_by_name("plan")[1].clone();
        doc.check(&pro, true);
        assert!(tracker.is_complete());

        doc.elements_by_name("user")[0].set_value("  ");
        assert!(!tracker.is_complete());
    }

    #[test]
    fn test_unload_guard() {
        let doc = signup();
        let tracker = FormTracker::start(doc.clone(), "signup");
        let guard = tracker.warn_before_unload();
        assert!(!doc.unload());

        doc.elements_by_name("user")[0].set_value("bob");
        assert!(doc.unload());

        drop(guard);
        assert!(!doc.unload());
    }
}
