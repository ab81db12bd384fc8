// File: src/dom.rs
// Purpose: Host DOM abstraction used by the validator

use std::rc::Rc;

/// Shape of a form control, as far as value extraction is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    TextArea,
    Select,
    Radio,
    Checkbox,
    /// Any non-control element (message containers, forms, ...)
    Other,
}

/// Events that trigger reactive re-validation of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEvent {
    Input,
    Change,
    Blur,
}

impl FieldEvent {
    pub const ALL: [FieldEvent; 3] = [FieldEvent::Input, FieldEvent::Change, FieldEvent::Blur];

    /// DOM event type name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldEvent::Input => "input",
            FieldEvent::Change => "change",
            FieldEvent::Blur => "blur",
        }
    }
}

/// Callback run when a field event fires
pub type EventHandler = Rc<dyn Fn()>;

/// Callback run before the page unloads; `true` asks the host to warn
pub type UnloadHandler = Rc<dyn Fn() -> bool>;

/// A single element of the page
///
/// Handles are cheap to clone and refer to the same underlying node.
pub trait ElementHandle: Clone + 'static {
    fn kind(&self) -> InputKind;

    /// `name` attribute, if any
    fn name(&self) -> Option<String>;

    fn value(&self) -> String;

    fn set_value(&self, value: &str);

    /// Checked state of radios and checkboxes; `false` for everything else
    fn is_checked(&self) -> bool;

    /// Whether the control is marked as mandatory (`required` attribute)
    fn is_required(&self) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Replace the element's children with one `tag` element per message,
    /// each carrying `class` and the message as plain text
    fn replace_messages(&self, tag: &str, class: &str, messages: &[&str]);

    /// Remove every child of the element
    fn clear_content(&self);
}

/// The page the validator is bound to
///
/// Implemented once per host: [`MemoryDocument`](crate::MemoryDocument)
/// natively, `WebDocument` in the browser crate.
pub trait Document: Clone + 'static {
    type Element: ElementHandle;

    /// Subscription handle; dropping it detaches the listener
    type Listener: 'static;

    /// Every element whose `name` attribute equals `name`, in document order
    fn elements_by_name(&self, name: &str) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Every input, select and textarea inside the form with id `form_id`
    fn form_elements(&self, form_id: &str) -> Vec<Self::Element>;

    fn listen(&self, element: &Self::Element, event: FieldEvent, handler: EventHandler) -> Self::Listener;

    fn on_before_unload(&self, handler: UnloadHandler) -> Self::Listener;

    /// Blocking user notification
    fn alert(&self, message: &str);

    /// Sink of the `console` output kind
    fn console_error(&self, message: &str) {
        tracing::warn!(target: "rhtmx_validator::console", "{}", message);
    }
}
