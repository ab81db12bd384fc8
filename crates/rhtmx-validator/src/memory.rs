// File: src/memory.rs
// Purpose: In-memory document for native use and tests

//! A tiny page model implementing [`Document`].
//!
//! Elements live in insertion order (document order). Listeners are kept in
//! a table and run synchronously by [`MemoryDocument::dispatch`]; alerts and
//! console lines are recorded instead of shown.

use crate::dom::{Document, ElementHandle, EventHandler, FieldEvent, InputKind, UnloadHandler};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// A child element rendered by [`ElementHandle::replace_messages`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNode {
    pub tag: String,
    pub class: String,
    pub text: String,
}

/// Description of an element to insert
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    kind: InputKind,
    name: Option<String>,
    id: Option<String>,
    form: Option<String>,
    value: String,
    checked: bool,
    required: bool,
}

impl ElementSpec {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Id of the owning form
    pub fn form(mut self, form_id: impl Into<String>) -> Self {
        self.form = Some(form_id.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

#[derive(Debug)]
struct ElementState {
    attrs: ElementSpec,
    classes: Vec<String>,
    children: Vec<MessageNode>,
}

/// Handle to an element of a [`MemoryDocument`]
#[derive(Clone)]
pub struct MemoryElement {
    key: usize,
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    pub fn id(&self) -> Option<String> {
        self.state.borrow().attrs.id.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    pub fn children(&self) -> Vec<MessageNode> {
        self.state.borrow().children.clone()
    }

    /// Text of every child, in order
    pub fn texts(&self) -> Vec<String> {
        self.state.borrow().children.iter().map(|c| c.text.clone()).collect()
    }

    pub fn set_checked(&self, checked: bool) {
        self.state.borrow_mut().attrs.checked = checked;
    }

    fn form(&self) -> Option<String> {
        self.state.borrow().attrs.form.clone()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryElement")
            .field("key", &self.key)
            .field("kind", &state.attrs.kind)
            .field("name", &state.attrs.name)
            .field("value", &state.attrs.value)
            .finish()
    }
}

impl ElementHandle for MemoryElement {
    fn kind(&self) -> InputKind {
        self.state.borrow().attrs.kind
    }

    fn name(&self) -> Option<String> {
        self.state.borrow().attrs.name.clone()
    }

    fn value(&self) -> String {
        self.state.borrow().attrs.value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state.borrow_mut().attrs.value = value.to_string();
    }

    fn is_checked(&self) -> bool {
        let state = self.state.borrow();
        matches!(state.attrs.kind, InputKind::Radio | InputKind::Checkbox) && state.attrs.checked
    }

    fn is_required(&self) -> bool {
        self.state.borrow().attrs.required
    }

    fn add_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    fn replace_messages(&self, tag: &str, class: &str, messages: &[&str]) {
        self.state.borrow_mut().children = messages
            .iter()
            .map(|text| MessageNode {
                tag: tag.to_string(),
                class: class.to_string(),
                text: text.to_string(),
            })
            .collect();
    }

    fn clear_content(&self) {
        self.state.borrow_mut().children.clear();
    }
}

struct FieldListener {
    id: u64,
    element: usize,
    event: FieldEvent,
    handler: EventHandler,
}

#[derive(Default)]
struct Inner {
    elements: RefCell<Vec<MemoryElement>>,
    field_listeners: RefCell<Vec<FieldListener>>,
    unload_listeners: RefCell<Vec<(u64, UnloadHandler)>>,
    next_listener: Cell<u64>,
    alerts: RefCell<Vec<String>>,
    console: RefCell<Vec<String>>,
}

impl Inner {
    fn next_id(&self) -> u64 {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        id
    }
}

/// Subscription to a [`MemoryDocument`]; dropping it removes the listener
pub struct MemoryListener {
    id: u64,
    document: Weak<Inner>,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        let Some(inner) = self.document.upgrade() else {
            return;
        };
        if let Ok(mut listeners) = inner.field_listeners.try_borrow_mut() {
            listeners.retain(|l| l.id != self.id);
        }
        if let Ok(mut listeners) = inner.unload_listeners.try_borrow_mut() {
            listeners.retain(|(id, _)| *id != self.id);
        };
    }
}

impl fmt::Debug for MemoryListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryListener").field("id", &self.id).finish()
    }
}

/// In-memory page
#[derive(Clone, Default)]
pub struct MemoryDocument {
    inner: Rc<Inner>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, attrs: ElementSpec) -> MemoryElement {
        let mut elements = self.inner.elements.borrow_mut();
        let element = MemoryElement {
            key: elements.len(),
            state: Rc::new(RefCell::new(ElementState {
                attrs,
                classes: Vec::new(),
                children: Vec::new(),
            })),
        };
        elements.push(element.clone());
        element
    }

    /// Text input named `name`
    pub fn add_input(&self, name: &str, value: &str) -> MemoryElement {
        self.insert(ElementSpec::new(InputKind::Text).name(name).value(value))
    }

    pub fn add_radio(&self, name: &str, value: &str, checked: bool) -> MemoryElement {
        self.insert(ElementSpec::new(InputKind::Radio).name(name).value(value).checked(checked))
    }

    pub fn add_checkbox(&self, name: &str, value: &str, checked: bool) -> MemoryElement {
        self.insert(ElementSpec::new(InputKind::Checkbox).name(name).value(value).checked(checked))
    }

    /// Empty element used as a message container
    pub fn add_container(&self, id: &str) -> MemoryElement {
        self.insert(ElementSpec::new(InputKind::Other).id(id))
    }

    /// Run every listener of `event` registered on `element`
    pub fn dispatch(&self, element: &MemoryElement, event: FieldEvent) {
        let handlers: Vec<EventHandler> = self
            .inner
            .field_listeners
            .borrow()
            .iter()
            .filter(|l| l.element == element.key && l.event == event)
            .map(|l| l.handler.clone())
            .collect();

        for handler in handlers {
            handler();
        }
    }

    /// Set the value and fire `input`
    pub fn type_into(&self, element: &MemoryElement, value: &str) {
        element.set_value(value);
        self.dispatch(element, FieldEvent::Input);
    }

    /// Check a radio or checkbox and fire `change`; sibling radios are
    /// unchecked
    pub fn check(&self, element: &MemoryElement, checked: bool) {
        if element.kind() == InputKind::Radio && checked {
            if let Some(name) = element.name() {
                for sibling in self.elements_by_name(&name) {
                    sibling.set_checked(false);
                }
            }
        }
        element.set_checked(checked);
        self.dispatch(element, FieldEvent::Change);
    }

    /// Fire `beforeunload`; `true` when some listener asked to warn
    pub fn unload(&self) -> bool {
        let handlers: Vec<UnloadHandler> = self
            .inner
            .unload_listeners
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        handlers.iter().fold(false, |warn, handler| handler() || warn)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.inner.alerts.borrow().clone()
    }

    pub fn console(&self) -> Vec<String> {
        self.inner.console.borrow().clone()
    }

    /// Number of attached field and unload listeners
    pub fn listener_count(&self) -> usize {
        self.inner.field_listeners.borrow().len() + self.inner.unload_listeners.borrow().len()
    }
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("elements", &self.inner.elements.borrow().len())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;
    type Listener = MemoryListener;

    fn elements_by_name(&self, name: &str) -> Vec<MemoryElement> {
        self.inner
            .elements
            .borrow()
            .iter()
            .filter(|e| e.name().as_deref() == Some(name))
            .cloned()
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.inner
            .elements
            .borrow()
            .iter()
            .find(|e| e.id().as_deref() == Some(id))
            .cloned()
    }

    fn form_elements(&self, form_id: &str) -> Vec<MemoryElement> {
        self.inner
            .elements
            .borrow()
            .iter()
            .filter(|e| e.kind() != InputKind::Other && e.form().as_deref() == Some(form_id))
            .cloned()
            .collect()
    }

    fn listen(&self, element: &MemoryElement, event: FieldEvent, handler: EventHandler) -> MemoryListener {
        let id = self.inner.next_id();
        self.inner.field_listeners.borrow_mut().push(FieldListener {
            id,
            element: element.key,
            event,
            handler,
        });
        MemoryListener {
            id,
            document: Rc::downgrade(&self.inner),
        }
    }

    fn on_before_unload(&self, handler: UnloadHandler) -> MemoryListener {
        let id = self.inner.next_id();
        self.inner.unload_listeners.borrow_mut().push((id, handler));
        MemoryListener {
            id,
            document: Rc::downgrade(&self.inner),
        }
    }

    fn alert(&self, message: &str) {
        self.inner.alerts.borrow_mut().push(message.to_string());
    }

    fn console_error(&self, message: &str) {
        tracing::warn!(target: "rhtmx_validator::console", "{}", message);
        self.inner.console.borrow_mut().push(message.to_string());
    }
}
