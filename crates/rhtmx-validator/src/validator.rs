// File: src/validator.rs
// Purpose: Public validator: registration, evaluation, rendering, reactivity

use crate::config::{OutputKind, ValidatorConfig};
use crate::dom::{Document, EventHandler, FieldEvent};
use crate::error::Result;
use crate::evaluator;
use crate::registry::{FieldEntry, Registry};
use crate::render;
use crate::rules::{self, Declaration, Rule};
use crate::store::{ErrorStore, FieldError};
use crate::tracker::FormTracker;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

struct State<D: Document> {
    document: D,
    kind: OutputKind,
    config: ValidatorConfig,
    registry: Registry<D>,
    store: ErrorStore,
    tracker: Option<FormTracker<D>>,
    _unload_guard: Option<D::Listener>,
}

impl<D: Document> State<D> {
    fn evaluate(&mut self, name: &str) -> Result<bool> {
        let Some(entry) = self.registry.get(name) else {
            tracing::debug!(field = name, "evaluate on an unregistered field");
            return Ok(true);
        };
        evaluator::evaluate_field(entry, &mut self.store, &self.config, self.kind)
    }

    fn render(&self) {
        render::render_all(&self.document, self.kind, &self.config, &self.registry, &self.store);
    }
}

/// Form validator bound to a [`Document`]
///
/// Fields are registered with ordered rules, evaluated on demand or on
/// their `input`/`change`/`blur` events (reactive mode), and their errors
/// are surfaced through the configured [`OutputKind`].
///
/// Validation and rendering are separate steps: [`validate_all`] only fills
/// the error store and toggles field classes, [`render`] performs the
/// output side effect.
///
/// [`validate_all`]: Validator::validate_all
/// [`render`]: Validator::render
pub struct Validator<D: Document> {
    state: Rc<RefCell<State<D>>>,
}

impl<D: Document> Validator<D> {
    pub fn new(document: D, kind: OutputKind, config: ValidatorConfig) -> Self {
        let tracker = match config.form_id.as_deref() {
            Some(form_id) if config.auto_track_dirty_state || config.warn_on_unsaved_exit => {
                Some(FormTracker::start(document.clone(), form_id))
            }
            None if config.auto_track_dirty_state || config.warn_on_unsaved_exit => {
                tracing::debug!("dirty-state tracking requested without a form id");
                None
            }
            _ => None,
        };

        let unload_guard = tracker
            .as_ref()
            .filter(|_| config.warn_on_unsaved_exit)
            .map(FormTracker::warn_before_unload);

        Self {
            state: Rc::new(RefCell::new(State {
                document,
                kind,
                config,
                registry: Registry::default(),
                store: ErrorStore::new(),
                tracker,
                _unload_guard: unload_guard,
            })),
        }
    }

    /// Construct from an output kind name; unknown names are rejected
    pub fn from_kind(document: D, kind: &str, config: ValidatorConfig) -> Result<Self> {
        Ok(Self::new(document, kind.parse()?, config))
    }

    /// Register `name` with its rules
    ///
    /// Nothing happens when no element carries that name. Registering a
    /// name again replaces its rules and elements in place (registration
    /// order is kept), drops the field's current errors and clears its
    /// input classes and message container.
    pub fn register_field(&mut self, name: &str, declaration: impl Into<Declaration>) -> &mut Self {
        self.register(name, rules::normalize(declaration.into()));
        self
    }

    fn register(&self, name: &str, rules: Vec<Rule>) {
        let mut state = self.state.borrow_mut();
        let elements = state.document.elements_by_name(name);
        if elements.is_empty() {
            tracing::debug!(field = name, "no element with this name, field not registered");
            return;
        }

        let listeners = if state.config.reactive {
            let weak = Rc::downgrade(&self.state);
            elements
                .iter()
                .flat_map(|element| FieldEvent::ALL.into_iter().map(move |event| (element, event)))
                .map(|(element, event)| state.document.listen(element, event, field_handler(weak.clone(), name)))
                .collect()
        } else {
            Vec::new()
        };

        tracing::debug!(field = name, rules = rules.len(), elements = elements.len(), "field registered");

        let previous = state.registry.insert(FieldEntry {
            name: name.to_string(),
            rules,
            elements,
            listeners,
        });
        if let Some(previous) = &previous {
            state.store.remove_field(name);
            if state.kind.writes_to_dom() {
                render::reset_field(&state.document, &state.config, name, &previous.elements);
                if let Some(entry) = state.registry.get(name) {
                    render::reset_field(&state.document, &state.config, name, &entry.elements);
                }
            }
            tracing::debug!(field = name, "previous registration replaced");
        }
        // Old listeners detach outside the borrow
        drop(state);
        drop(previous);
    }

    /// Chaining alias of [`register_field`](Self::register_field)
    pub fn input(&mut self, name: &str, declaration: impl Into<Declaration>) -> &mut Self {
        self.register_field(name, declaration)
    }

    /// Evaluate every field in registration order; `true` when no field has
    /// errors
    pub fn validate_all(&mut self) -> Result<bool> {
        let mut state = self.state.borrow_mut();
        state.store.clear();

        let names = state.registry.names();
        for name in &names {
            state.evaluate(name)?;
        }

        tracing::debug!(fields = names.len(), errors = state.store.len(), "form validated");
        Ok(state.store.is_empty())
    }

    /// Evaluate a single field; other fields' errors are left alone
    ///
    /// An unregistered name is treated as valid.
    pub fn evaluate_field(&mut self, name: &str) -> Result<bool> {
        self.state.borrow_mut().evaluate(name)
    }

    /// Current errors, in insertion order
    pub fn errors(&self) -> Vec<FieldError> {
        self.state.borrow().store.to_vec()
    }

    /// Surface the current errors through the output kind
    ///
    /// Only the `array` kind returns them.
    pub fn render(&self) -> Option<Vec<FieldError>> {
        let state = self.state.borrow();
        state.render();
        (state.kind == OutputKind::Array).then(|| state.store.to_vec())
    }

    /// Clear every error and return all fields to their pre-validation look
    pub fn reset(&mut self) -> &mut Self {
        {
            let mut state = self.state.borrow_mut();
            state.store.clear();
            render::reset_visuals(&state.document, &state.config, &state.registry);
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.state.borrow().store.is_empty()
    }

    pub fn output_kind(&self) -> OutputKind {
        self.state.borrow().kind
    }

    pub fn config(&self) -> Ref<'_, ValidatorConfig> {
        Ref::map(self.state.borrow(), |state| &state.config)
    }

    /// Registered field names, in registration order
    pub fn field_names(&self) -> Vec<String> {
        self.state.borrow().registry.names()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tracker started by `autoTrackDirtyState` / `warnOnUnsavedExit`
    pub fn form_tracker(&self) -> Option<FormTracker<D>> {
        self.state.borrow().tracker.clone()
    }
}

impl<D: Document> fmt::Debug for Validator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Validator")
            .field("kind", &state.kind)
            .field("fields", &state.registry.names())
            .field("errors", &state.store.len())
            .finish()
    }
}

/// Listener body: re-evaluate `field` and refresh its display surface
fn field_handler<D: Document>(state: Weak<RefCell<State<D>>>, field: &str) -> EventHandler {
    let field = field.to_string();
    Rc::new(move || {
        let Some(strong) = state.upgrade() else {
            return;
        };
        let Ok(mut guard) = strong.try_borrow_mut() else {
            tracing::debug!(field = %field, "validator busy, event ignored");
            return;
        };

        match guard.evaluate(&field) {
            Ok(_) => render::render_after_event(&guard.document, guard.kind, &guard.config, &field, &guard.store),
            Err(err) => tracing::error!(error = %err, "reactive validation failed"),
        }
    })
}
