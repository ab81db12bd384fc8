// File: src/rules.rs
// Purpose: Convert JavaScript rule declarations into validator declarations

//! Three JavaScript shapes are accepted:
//!
//! ```javascript
//! // list of [predicate, message, ...args]
//! v.input("age", [[isNumber, "Not a number"], [min, "Too young", 18]]);
//! // builder callback; `add` returns itself
//! v.input("age", (add) => add([isNumber, "Not a number"])([min, "Too young", 18]));
//! // keyed object, in key order
//! v.input("age", { number: [isNumber, "Not a number"] });
//! ```
//!
//! Predicates are called as `predicate(value, ...args)`; the value is a
//! string, a string-or-null for radio groups or an array for checkbox
//! groups. An exception thrown by a predicate becomes a rule error.

use js_sys::{Array, Function, Object};
use rhtmx_validator::rules::Predicate;
use rhtmx_validator::{Declaration, FieldValue, PredicateError, RuleDecl};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Turn any JavaScript value into a declaration; unknown shapes declare
/// nothing
pub fn declaration_from_js(rules: JsValue) -> Declaration {
    if Array::is_array(&rules) {
        let entries = Array::from(&rules);
        return Declaration::List(entries.iter().map(|entry| rule_from_js(&entry)).collect());
    }

    if let Some(builder) = rules.dyn_ref::<Function>() {
        let builder = builder.clone();
        return Declaration::builder(move |adder| {
            let collected = Rc::new(RefCell::new(Vec::new()));
            let sink = collected.clone();
            // `add` returns itself so calls chain: add(a)(b)
            let this = Rc::new(RefCell::new(JsValue::UNDEFINED));
            let chain = this.clone();
            let add = Closure::<dyn FnMut(JsValue) -> JsValue>::new(move |entry: JsValue| {
                sink.borrow_mut().push(entry);
                chain.borrow().clone()
            });
            this.replace(add.as_ref().clone());

            if let Err(err) = builder.call1(&JsValue::NULL, add.as_ref()) {
                tracing::warn!(error = %describe(&err), "rule builder threw, keeping the rules added so far");
            }
            for entry in collected.take() {
                adder.add(rule_from_js(&entry));
            }
        });
    }

    if rules.is_object() {
        let entries = Object::entries(rules.unchecked_ref::<Object>());
        return Declaration::keyed(entries.iter().filter_map(|pair| {
            let pair = Array::from(&pair);
            let key = pair.get(0).as_string()?;
            Some((key, rule_from_js(&pair.get(1))))
        }));
    }

    tracing::debug!("rule declaration is neither an array, a function nor an object");
    Declaration::List(Vec::new())
}

/// `[predicate, message, ...args]`
fn rule_from_js(entry: &JsValue) -> RuleDecl {
    if !Array::is_array(entry) {
        return RuleDecl::malformed();
    }
    let parts = Array::from(entry);
    let Ok(function) = parts.get(0).dyn_into::<Function>() else {
        return RuleDecl::malformed();
    };
    let message = parts.get(1).as_string();
    let args = parts.slice(2, parts.length());

    RuleDecl::from_parts(Some(js_predicate(function, args)), message)
}

fn js_predicate(function: Function, args: Array) -> Predicate {
    Rc::new(move |value: &FieldValue| {
        let call_args = Array::new();
        call_args.push(&to_js(value)?);
        for arg in args.iter() {
            call_args.push(&arg);
        }

        function
            .apply(&JsValue::NULL, &call_args)
            .map(|result| result.is_truthy())
            .map_err(|err| PredicateError::new(describe(&err)))
    })
}

/// Field value as seen by JavaScript predicates; an unchecked radio group
/// is `null`
pub fn to_js(value: &FieldValue) -> Result<JsValue, PredicateError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value
        .serialize(&serializer)
        .map_err(|err| PredicateError::new(err.to_string()))
}

/// Readable text of a thrown JavaScript value
pub fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
