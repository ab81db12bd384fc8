// File: src/dom.rs
// Purpose: web-sys implementation of the validator's Document traits

use rhtmx_validator::{Document, ElementHandle, EventHandler, FieldEvent, InputKind, UnloadHandler};
use wasm_bindgen::prelude::*;
use web_sys::{BeforeUnloadEvent, Element, Event, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList};

/// The browser page
#[derive(Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// Document of the global `window`
    pub fn from_window() -> Result<Self, JsError> {
        let window = web_sys::window().ok_or_else(|| JsError::new("no global window"))?;
        let document = window.document().ok_or_else(|| JsError::new("window has no document"))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

fn elements_of(nodes: NodeList) -> Vec<WebElement> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(WebElement::new)
        .collect()
}

/// Handle to a DOM element
#[derive(Clone, Debug)]
pub struct WebElement {
    element: Element,
}

impl WebElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn input(&self) -> Option<&HtmlInputElement> {
        self.element.dyn_ref::<HtmlInputElement>()
    }
}

impl ElementHandle for WebElement {
    fn kind(&self) -> InputKind {
        if let Some(input) = self.input() {
            return match input.type_().as_str() {
                "radio" => InputKind::Radio,
                "checkbox" => InputKind::Checkbox,
                _ => InputKind::Text,
            };
        }
        if self.element.dyn_ref::<HtmlTextAreaElement>().is_some() {
            InputKind::TextArea
        } else if self.element.dyn_ref::<HtmlSelectElement>().is_some() {
            InputKind::Select
        } else {
            InputKind::Other
        }
    }

    fn name(&self) -> Option<String> {
        self.element.get_attribute("name")
    }

    fn value(&self) -> String {
        if let Some(input) = self.input() {
            input.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            self.element.text_content().unwrap_or_default()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.input() {
            input.set_value(value);
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else {
            self.element.set_text_content(Some(value));
        }
    }

    fn is_checked(&self) -> bool {
        matches!(self.kind(), InputKind::Radio | InputKind::Checkbox)
            && self.input().is_some_and(HtmlInputElement::checked)
    }

    fn is_required(&self) -> bool {
        self.element.has_attribute("required")
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().add_1(class) {
            tracing::warn!(class, error = ?err, "could not add class");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().remove_1(class) {
            tracing::warn!(class, error = ?err, "could not remove class");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn replace_messages(&self, tag: &str, class: &str, messages: &[&str]) {
        self.clear_content();
        let Some(document) = self.element.owner_document() else {
            return;
        };

        for message in messages {
            let appended = document.create_element(tag).and_then(|child| {
                child.set_class_name(class);
                child.set_text_content(Some(message));
                self.element.append_child(&child)
            });
            if let Err(err) = appended {
                tracing::warn!(tag, error = ?err, "could not render message");
            }
        }
    }

    fn clear_content(&self) {
        self.element.set_inner_html("");
    }
}

/// Attached DOM listener; removed from its target on drop
pub struct WebListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WebListener {
    fn attach(target: EventTarget, event: &'static str, callback: Closure<dyn FnMut(Event)>) -> Self {
        if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            tracing::warn!(event, error = ?err, "could not attach listener");
        }
        Self { target, event, callback }
    }
}

impl Drop for WebListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl Document for WebDocument {
    type Element = WebElement;
    type Listener = WebListener;

    fn elements_by_name(&self, name: &str) -> Vec<WebElement> {
        elements_of(self.document.get_elements_by_name(name))
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement::new)
    }

    fn form_elements(&self, form_id: &str) -> Vec<WebElement> {
        let Some(form) = self.document.get_element_by_id(form_id) else {
            return Vec::new();
        };
        match form.query_selector_all("input, select, textarea") {
            Ok(nodes) => elements_of(nodes),
            Err(err) => {
                tracing::warn!(form = form_id, error = ?err, "could not list form controls");
                Vec::new()
            }
        }
    }

    fn listen(&self, element: &WebElement, event: FieldEvent, handler: EventHandler) -> WebListener {
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| handler());
        WebListener::attach(element.element.clone().into(), event.as_str(), callback)
    }

    fn on_before_unload(&self, handler: UnloadHandler) -> WebListener {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if handler() {
                event.prevent_default();
                if let Some(unload) = event.dyn_ref::<BeforeUnloadEvent>() {
                    unload.set_return_value("");
                }
            }
        });
        WebListener::attach(self.window.clone().into(), "beforeunload", callback)
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?err, "alert failed");
        }
    }

    fn console_error(&self, message: &str) {
        web_sys::console::error_1(&JsValue::from_str(message));
    }
}
