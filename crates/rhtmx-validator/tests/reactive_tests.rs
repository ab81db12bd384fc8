//! Reactive re-validation and form tracking through MemoryDocument events

use pretty_assertions::assert_eq;
use rhtmx_validator::prelude::*;
use rhtmx_validator::rules::{required, text};
use rhtmx_validator::MemoryElement;

fn signup(kind: OutputKind, config: ValidatorConfig) -> (MemoryDocument, Validator<MemoryDocument>) {
    let doc = MemoryDocument::new();
    doc.add_input("email", "");
    doc.add_input("user", "");
    doc.add_container("error-email");
    doc.add_container("error-user");
    doc.add_container("panel");

    let mut validator = Validator::new(doc.clone(), kind, config);
    validator
        .register_field(
            "email",
            vec![
                RuleDecl::new(required, "email required"),
                RuleDecl::new(text(predicates::is_valid_email), "invalid email"),
            ],
        )
        .register_field("user", vec![RuleDecl::new(required, "user required")]);

    (doc, validator)
}

fn input(doc: &MemoryDocument, name: &str) -> MemoryElement {
    doc.elements_by_name(name)[0].clone()
}

fn container(doc: &MemoryDocument, id: &str) -> MemoryElement {
    doc.element_by_id(id).unwrap()
}

#[test]
fn test_typing_revalidates_only_that_field() {
    let (doc, mut validator) = signup(OutputKind::Inputs, ValidatorConfig::default());
    validator.validate_all().unwrap();
    validator.render();
    assert_eq!(validator.errors().len(), 2);

    doc.type_into(&input(&doc, "email"), "not-an-email");

    let errors = validator.errors();
    assert_eq!(
        errors,
        vec![
            FieldError::new("user", "user required"),
            FieldError::new("email", "invalid email"),
        ]
    );
    assert_eq!(container(&doc, "error-email").texts(), vec!["invalid email".to_string()]);
    assert_eq!(container(&doc, "error-user").texts(), vec!["user required".to_string()]);
    assert!(input(&doc, "email").has_class("input-error"));
}

#[test]
fn test_fixing_a_field_clears_its_message() {
    let (doc, mut validator) = signup(OutputKind::Inputs, ValidatorConfig::default());
    validator.validate_all().unwrap();
    validator.render();

    doc.type_into(&input(&doc, "email"), "ana@example.com");

    assert!(container(&doc, "error-email").children().is_empty());
    assert!(input(&doc, "email").has_class("input-success"));
    assert!(!input(&doc, "email").has_class("input-error"));
}

#[test]
fn test_blur_and_change_also_trigger() {
    let (doc, validator) = signup(OutputKind::Array, ValidatorConfig::default());
    assert!(validator.errors().is_empty());

    doc.dispatch(&input(&doc, "user"), FieldEvent::Blur);
    assert_eq!(validator.errors(), vec![FieldError::new("user", "user required")]);

    input(&doc, "user").set_value("ana");
    doc.dispatch(&input(&doc, "user"), FieldEvent::Change);
    assert!(validator.errors().is_empty());
}

#[test]
fn test_html_panel_refreshes_on_events() {
    let (doc, _validator) = signup(OutputKind::Html, ValidatorConfig::default().message_container("panel"));

    doc.type_into(&input(&doc, "email"), "x");
    assert_eq!(container(&doc, "panel").texts(), vec!["invalid email".to_string()]);

    doc.type_into(&input(&doc, "email"), "x@y.io");
    assert!(container(&doc, "panel").texts().is_empty());
}

#[test]
fn test_alert_kind_does_not_alert_on_events() {
    let (doc, validator) = signup(OutputKind::Alert, ValidatorConfig::default());

    doc.type_into(&input(&doc, "email"), "x");

    assert_eq!(validator.errors().len(), 1);
    assert!(doc.alerts().is_empty());
}

#[test]
fn test_non_reactive_attaches_nothing() {
    let (doc, validator) = signup(OutputKind::Array, ValidatorConfig::default().reactive(false));

    doc.type_into(&input(&doc, "email"), "x");

    assert_eq!(doc.listener_count(), 0);
    assert!(validator.errors().is_empty());
}

#[test]
fn test_listeners_follow_registrations() {
    let doc = MemoryDocument::new();
    doc.add_radio("plan", "free", false);
    doc.add_radio("plan", "pro", false);

    let mut validator = Validator::new(doc.clone(), OutputKind::Array, ValidatorConfig::default());
    validator.register_field("plan", vec![RuleDecl::new(required, "choose a plan")]);
    assert_eq!(doc.listener_count(), 2 * FieldEvent::ALL.len());

    validator.register_field("plan", vec![RuleDecl::new(required, "pick one")]);
    assert_eq!(doc.listener_count(), 2 * FieldEvent::ALL.len());

    let pro = doc.elements_by_name("plan")[1].clone();
    doc.check(&pro, false);
    assert_eq!(validator.errors(), vec![FieldError::new("plan", "pick one")]);

    doc.check(&pro, true);
    assert!(validator.errors().is_empty());

    drop(validator);
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_failing_predicate_in_event_is_contained() {
    let doc = MemoryDocument::new();
    let field = doc.add_input("a", "");

    let mut validator = Validator::new(doc.clone(), OutputKind::Array, ValidatorConfig::default());
    validator.register_field(
        "a",
        vec![RuleDecl::fallible(|_| Err(PredicateError::new("boom")), "never")],
    );

    doc.type_into(&field, "x");

    assert!(validator.errors().is_empty());
    assert!(validator.evaluate_field("a").is_err());
}

#[test]
fn test_auto_tracking_and_unload_warning() {
    let doc = MemoryDocument::new();
    let email = doc.insert(ElementSpec::new(InputKind::Text).name("email").form("signup"));
    let config = ValidatorConfig::default().track_form("signup", true);

    let validator = Validator::new(doc.clone(), OutputKind::Inputs, config);
    let tracker = validator.form_tracker().unwrap();

    assert!(!tracker.has_changes());
    assert!(!doc.unload());

    email.set_value("ana@example.com");
    assert!(tracker.has_changes());
    assert!(doc.unload());

    tracker.reset();
    assert!(!doc.unload());

    drop(validator);
    email.set_value("changed");
    assert!(!doc.unload());
}

#[test]
fn test_tracking_without_form_id_is_skipped() {
    let mut config = ValidatorConfig::default();
    config.auto_track_dirty_state = true;

    let validator = Validator::new(MemoryDocument::new(), OutputKind::Inputs, config);

    assert!(validator.form_tracker().is_none());
}
