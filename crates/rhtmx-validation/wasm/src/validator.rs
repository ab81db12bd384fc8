// File: src/validator.rs
// Purpose: `Validator` class exported to JavaScript

use crate::dom::WebDocument;
use crate::rules::declaration_from_js;
use rhtmx_validator::{OutputKind, Validator, ValidatorConfig};
use wasm_bindgen::prelude::*;

/// Field validator bound to the current page
///
/// # Example (JavaScript)
/// ```javascript
/// const v = new Validator("inputs", { messageIdPrefix: "err-" });
/// v.input("email", [[isValidEmail, "Invalid email"]]);
/// if (!v.validateAll()) v.render();
/// ```
#[wasm_bindgen(js_name = Validator)]
pub struct JsValidator {
    inner: Validator<WebDocument>,
}

#[wasm_bindgen(js_class = Validator)]
impl JsValidator {
    /// `outputKind` is one of array, html, inputs, console, alert or
    /// short-circuit and defaults to inputs; `options` may be omitted
    #[wasm_bindgen(constructor)]
    pub fn new(output_kind: Option<String>, options: JsValue) -> Result<JsValidator, JsError> {
        let config = if options.is_undefined() || options.is_null() {
            ValidatorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };

        let document = WebDocument::from_window()?;
        let inner = match output_kind.as_deref() {
            Some(kind) => Validator::from_kind(document, kind, config)?,
            None => Validator::new(document, OutputKind::Inputs, config),
        };
        Ok(Self { inner })
    }

    /// Register a field with rules in any of the accepted shapes
    pub fn input(&mut self, name: &str, rules: JsValue) {
        self.inner.register_field(name, declaration_from_js(rules));
    }

    #[wasm_bindgen(js_name = registerField)]
    pub fn register_field(&mut self, name: &str, rules: JsValue) {
        self.input(name, rules);
    }

    #[wasm_bindgen(js_name = validateAll)]
    pub fn validate_all(&mut self) -> Result<bool, JsError> {
        Ok(self.inner.validate_all()?)
    }

    #[wasm_bindgen(js_name = validateField)]
    pub fn validate_field(&mut self, name: &str) -> Result<bool, JsError> {
        Ok(self.inner.evaluate_field(name)?)
    }

    #[wasm_bindgen(js_name = evaluateField)]
    pub fn evaluate_field(&mut self, name: &str) -> Result<bool, JsError> {
        self.validate_field(name)
    }

    /// Array of `{ field, message }`
    #[wasm_bindgen(js_name = getErrors)]
    pub fn get_errors(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.errors())?)
    }

    /// Errors for the `array` kind, `undefined` otherwise
    pub fn render(&self) -> Result<JsValue, JsError> {
        match self.inner.render() {
            Some(errors) => Ok(serde_wasm_bindgen::to_value(&errors)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Whether the tracked form changed since tracking started
    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.inner.form_tracker().is_some_and(|tracker| tracker.has_changes())
    }

    /// Registered field names, in registration order
    #[wasm_bindgen(getter)]
    pub fn fields(&self) -> Vec<String> {
        self.inner.field_names()
    }
}
