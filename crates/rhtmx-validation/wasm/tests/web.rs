//! Browser tests: run with `wasm-pack test --headless --firefox`

use js_sys::{Array, Function};
use rhtmx_validation_wasm::rules::declaration_from_js;
use rhtmx_validation_wasm::{JsValidator, WebDocument};
use rhtmx_validator::rules::normalize;
use rhtmx_validator::{Document, ElementHandle, FieldValue, InputKind, OutputKind, Validator, ValidatorConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;

wasm_bindgen_test_configure!(run_in_browser);

/// Replace the body with `html` and return the page
fn page(html: &str) -> WebDocument {
    let doc = ok(WebDocument::from_window());
    doc.document().body().unwrap().set_inner_html(html);
    doc
}

fn ok<T>(result: Result<T, JsError>) -> T {
    result.map_err(JsValue::from).unwrap()
}

fn input(doc: &WebDocument, name: &str) -> HtmlInputElement {
    doc.elements_by_name(name)[0].element().clone().dyn_into().unwrap()
}

fn js_fn(args: &str, body: &str) -> JsValue {
    Function::new_with_args(args, body).into()
}

#[wasm_bindgen_test]
fn test_element_kinds_and_values() {
    let doc = page(
        r#"<input name="a" value=" x ">
           <textarea name="b">notes</textarea>
           <select name="c"><option value="1" selected>one</option></select>
           <input type="radio" name="d" value="r1" checked>
           <input type="checkbox" name="e" value="c1">"#,
    );

    let kinds: Vec<InputKind> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|n| doc.elements_by_name(n)[0].kind())
        .collect();
    assert_eq!(
        kinds,
        vec![InputKind::Text, InputKind::TextArea, InputKind::Select, InputKind::Radio, InputKind::Checkbox]
    );
    assert_eq!(doc.elements_by_name("b")[0].value(), "notes");
    assert!(doc.elements_by_name("d")[0].is_checked());
    assert!(!doc.elements_by_name("e")[0].is_checked());
}

#[wasm_bindgen_test]
fn test_messages_and_classes() {
    let doc = page(r#"<div id="box"></div>"#);
    let container = doc.element_by_id("box").unwrap();

    container.replace_messages("span", "message-error", &["one", "two"]);
    container.add_class("message-error");

    assert_eq!(container.element().child_element_count(), 2);
    assert_eq!(container.element().text_content().unwrap(), "onetwo");
    assert!(container.has_class("message-error"));

    container.clear_content();
    assert_eq!(container.element().child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_js_list_declaration_with_args() {
    let at_least = js_fn("value, min", "return Number(value) >= min;");
    let entry = Array::of3(&at_least, &JsValue::from_str("too young"), &JsValue::from_f64(18.0));
    let rules = normalize(declaration_from_js(Array::of1(&entry).into()));

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].message(), "too young");
    assert_eq!(rules[0].check(&FieldValue::from("15")), Ok(false));
    assert_eq!(rules[0].check(&FieldValue::from("21")), Ok(true));
}

#[wasm_bindgen_test]
fn test_js_builder_and_keyed_declarations() {
    let always_false = js_fn("value", "return false;");
    let builder = Function::new_with_args("add", "add([globalThis.__no, 'first']); add('junk'); add([globalThis.__no]);");
    js_sys::Reflect::set(&js_sys::global(), &"__no".into(), &always_false).unwrap();

    let rules = normalize(declaration_from_js(builder.into()));
    let messages: Vec<&str> = rules.iter().map(|r| r.message()).collect();
    assert_eq!(messages, vec!["first", "Custom rule not satisfied"]);

    let keyed = js_sys::Object::new();
    js_sys::Reflect::set(&keyed, &"b".into(), &Array::of2(&always_false, &"from b".into())).unwrap();
    js_sys::Reflect::set(&keyed, &"a".into(), &Array::of2(&always_false, &"from a".into())).unwrap();
    let rules = normalize(declaration_from_js(keyed.into()));
    let messages: Vec<&str> = rules.iter().map(|r| r.message()).collect();
    assert_eq!(messages, vec!["from b", "from a"]);
}

#[wasm_bindgen_test]
fn test_js_builder_add_chains() {
    let always_false = js_fn("value", "return false;");
    js_sys::Reflect::set(&js_sys::global(), &"__no".into(), &always_false).unwrap();
    let builder = Function::new_with_args("add", "add([globalThis.__no, 'first'])([globalThis.__no, 'second']);");

    let rules = normalize(declaration_from_js(builder.into()));
    let messages: Vec<&str> = rules.iter().map(|r| r.message()).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[wasm_bindgen_test]
fn test_radio_value_reaches_js_as_null() {
    let is_null = js_fn("value", "return value === null;");
    let rules = normalize(declaration_from_js(Array::of1(&Array::of2(&is_null, &"x".into())).into()));

    assert_eq!(rules[0].check(&FieldValue::Radio(None)), Ok(true));
    assert_eq!(rules[0].check(&FieldValue::from("a")), Ok(false));
}

#[wasm_bindgen_test]
fn test_throwing_predicate_becomes_error() {
    let thrower = js_fn("value", "throw new Error('broken rule');");
    let rules = normalize(declaration_from_js(Array::of1(&Array::of2(&thrower, &"x".into())).into()));

    let err = rules[0].check(&FieldValue::from("a")).unwrap_err();
    assert_eq!(err.message(), "broken rule");
}

#[wasm_bindgen_test]
fn test_reactive_validation_in_the_page() {
    let doc = page(r#"<input name="email" value=""><div id="error-email"></div>"#);
    let mut validator = Validator::new(doc.clone(), OutputKind::Inputs, ValidatorConfig::default());
    let has_at = js_fn("value", "return value.includes('@');");
    validator.register_field("email", declaration_from_js(Array::of1(&Array::of2(&has_at, &"need @".into())).into()));

    let field = input(&doc, "email");
    field.set_value("ana");
    field.dispatch_event(&web_sys::Event::new("input").unwrap()).unwrap();

    let container = doc.element_by_id("error-email").unwrap();
    assert_eq!(container.element().text_content().unwrap(), "need @");
    assert!(field.class_list().contains("input-error"));

    field.set_value("ana@x.io");
    field.dispatch_event(&web_sys::Event::new("blur").unwrap()).unwrap();
    assert_eq!(container.element().child_element_count(), 0);
    assert!(field.class_list().contains("input-success"));
}

#[wasm_bindgen_test]
fn test_js_validator_class() {
    page(r#"<input name="user" value="">"#);
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"reactive".into(), &JsValue::FALSE).unwrap();

    let mut validator = ok(JsValidator::new(Some("array".to_string()), options.into()));
    let filled = js_fn("value", "return value.length > 0;");
    validator.input("user", Array::of1(&Array::of2(&filled, &"user required".into())).into());

    assert!(!ok(validator.validate_all()));
    assert_eq!(validator.fields(), vec!["user".to_string()]);
    assert_eq!(Array::from(&ok(validator.get_errors())).length(), 1);
    assert!(!ok(validator.render()).is_undefined());

    validator.reset();
    assert!(validator.is_valid());
    assert!(!validator.is_dirty());
}

#[wasm_bindgen_test]
fn test_js_validator_rejects_unknown_kind() {
    assert!(JsValidator::new(Some("toast".to_string()), JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_js_validator_defaults_to_inputs() {
    let doc = page(r#"<input name="user" value=""><div id="error-user"></div>"#);

    let mut validator = ok(JsValidator::new(None, JsValue::UNDEFINED));
    let filled = js_fn("value", "return value.length > 0;");
    validator.register_field("user", Array::of1(&Array::of2(&filled, &"user required".into())).into());

    assert!(!ok(validator.evaluate_field("user")));
    assert!(ok(validator.render()).is_undefined());
    assert!(input(&doc, "user").class_list().contains("input-error"));
    assert_eq!(doc.element_by_id("error-user").unwrap().element().text_content().unwrap(), "user required");
}
