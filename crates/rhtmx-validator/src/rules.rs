// File: src/rules.rs
// Purpose: Rules, rule declarations and their normalization

//! A [`Rule`] pairs a predicate with the message shown when it fails.
//!
//! Callers declare rules in one of three shapes, captured by
//! [`Declaration`]:
//!
//! - a list of [`RuleDecl`]s (`[predicate, message, ...args]`),
//! - a builder callback receiving a [`RuleAdder`],
//! - keyed entries, applied in insertion order.
//!
//! [`normalize`] turns any of them into one ordered `Vec<Rule>`. Entries
//! without a callable predicate are dropped silently.

use crate::error::PredicateError;
use crate::value::FieldValue;
use std::fmt;
use std::rc::Rc;

/// Message used when a declaration does not carry one
pub const DEFAULT_MESSAGE: &str = "Custom rule not satisfied";

pub type PredicateResult = Result<bool, PredicateError>;

/// Shared predicate over a field value
pub type Predicate = Rc<dyn Fn(&FieldValue) -> PredicateResult>;

/// A predicate and the message shown when it answers `false`
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue) -> bool + 'static,
    {
        Self::fallible(move |value| Ok(predicate(value)), message)
    }

    /// Rule whose predicate may fail to run (host callbacks that can throw)
    pub fn fallible<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue) -> PredicateResult + 'static,
    {
        Self {
            predicate: Rc::new(predicate),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the predicate; `Ok(true)` means the value passes
    pub fn check(&self, value: &FieldValue) -> PredicateResult {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish_non_exhaustive()
    }
}

/// One declared rule, possibly malformed
pub struct RuleDecl {
    predicate: Option<Predicate>,
    message: Option<String>,
}

impl RuleDecl {
    /// `[predicate, message]`
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue) -> bool + 'static,
    {
        Self::from_rule(Rule::new(predicate, message))
    }

    pub fn fallible<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue) -> PredicateResult + 'static,
    {
        Self::from_rule(Rule::fallible(predicate, message))
    }

    /// `[predicate, message, ...args]`: the extra arguments are bound into
    /// the predicate, which is then called as `predicate(value, &args)`
    pub fn curried<F, A>(predicate: F, message: impl Into<String>, args: Vec<A>) -> Self
    where
        F: Fn(&FieldValue, &[A]) -> bool + 'static,
        A: 'static,
    {
        Self::new(move |value| predicate(value, &args), message)
    }

    /// Raw parts as produced by host bindings; a missing predicate makes the
    /// declaration malformed, a missing message falls back to
    /// [`DEFAULT_MESSAGE`]
    pub fn from_parts(predicate: Option<Predicate>, message: Option<String>) -> Self {
        Self { predicate, message }
    }

    /// Declaration that does not describe a rule
    pub fn malformed() -> Self {
        Self::from_parts(None, None)
    }

    pub fn is_well_formed(&self) -> bool {
        self.predicate.is_some()
    }

    fn from_rule(rule: Rule) -> Self {
        Self {
            predicate: Some(rule.predicate),
            message: Some(rule.message),
        }
    }

    fn into_rule(self) -> Option<Rule> {
        let predicate = self.predicate?;
        let message = self
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
        Some(Rule { predicate, message })
    }
}

impl From<Rule> for RuleDecl {
    fn from(rule: Rule) -> Self {
        Self::from_rule(rule)
    }
}

impl<'a, F> From<(F, &'a str)> for RuleDecl
where
    F: Fn(&FieldValue) -> bool + 'static,
{
    fn from((predicate, message): (F, &'a str)) -> Self {
        Self::new(predicate, message)
    }
}

impl fmt::Debug for RuleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDecl")
            .field("well_formed", &self.is_well_formed())
            .field("message", &self.message)
            .finish()
    }
}

/// Accumulator handed to builder-style declarations
#[derive(Debug, Default)]
pub struct RuleAdder {
    decls: Vec<RuleDecl>,
}

impl RuleAdder {
    pub fn add(&mut self, decl: impl Into<RuleDecl>) -> &mut Self {
        self.decls.push(decl.into());
        self
    }

    pub fn rule<F>(&mut self, predicate: F, message: impl Into<String>) -> &mut Self
    where
        F: Fn(&FieldValue) -> bool + 'static,
    {
        self.add(RuleDecl::new(predicate, message))
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// The accepted rule-declaration shapes
pub enum Declaration {
    List(Vec<RuleDecl>),
    Builder(Box<dyn FnOnce(&mut RuleAdder)>),
    Keyed(Vec<(String, RuleDecl)>),
}

impl Declaration {
    pub fn builder<F>(build: F) -> Self
    where
        F: FnOnce(&mut RuleAdder) + 'static,
    {
        Declaration::Builder(Box::new(build))
    }

    pub fn keyed<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RuleDecl)>,
    {
        Declaration::Keyed(entries.into_iter().map(|(k, d)| (k.into(), d)).collect())
    }
}

impl From<Vec<RuleDecl>> for Declaration {
    fn from(decls: Vec<RuleDecl>) -> Self {
        Declaration::List(decls)
    }
}

impl From<Vec<Rule>> for Declaration {
    fn from(rules: Vec<Rule>) -> Self {
        Declaration::List(rules.into_iter().map(RuleDecl::from).collect())
    }
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::List(decls) => f.debug_tuple("List").field(decls).finish(),
            Declaration::Builder(_) => f.write_str("Builder(..)"),
            Declaration::Keyed(entries) => f.debug_tuple("Keyed").field(entries).finish(),
        }
    }
}

/// Canonical ordered rule list of a declaration
pub fn normalize(declaration: Declaration) -> Vec<Rule> {
    let decls = match declaration {
        Declaration::List(decls) => decls,
        Declaration::Builder(build) => {
            let mut adder = RuleAdder::default();
            build(&mut adder);
            adder.decls
        }
        Declaration::Keyed(entries) => entries.into_iter().map(|(_, decl)| decl).collect(),
    };

    let total = decls.len();
    let rules: Vec<Rule> = decls.into_iter().filter_map(RuleDecl::into_rule).collect();
    if rules.len() < total {
        tracing::debug!(dropped = total - rules.len(), "skipped malformed rule declarations");
    }
    rules
}

// Predicates over field values

/// Something was entered: non-blank text, a checked radio, a checked box
pub fn required(value: &FieldValue) -> bool {
    !value.is_empty()
}

/// Lift a text predicate to field values (see [`FieldValue::as_text`])
pub fn text<F>(predicate: F) -> impl Fn(&FieldValue) -> bool + 'static
where
    F: Fn(&str) -> bool + 'static,
{
    move |value| predicate(&value.as_text())
}

/// At least `min` entries selected
pub fn min_checked(min: usize) -> impl Fn(&FieldValue) -> bool + 'static {
    move |value| value.selected_count() >= min
}

/// At most `max` entries selected
pub fn max_checked(max: usize) -> impl Fn(&FieldValue) -> bool + 'static {
    move |value| value.selected_count() <= max
}

/// A select whose value differs from the placeholder `invalid` (e.g. `"0"`)
pub fn select_valid(invalid: impl Into<String>) -> impl Fn(&FieldValue) -> bool + 'static {
    let invalid = invalid.into();
    move |value| value.as_text() != invalid.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn messages(rules: &[Rule]) -> Vec<&str> {
        rules.iter().map(Rule::message).collect()
    }

    fn always(_: &FieldValue) -> bool {
        true
    }

    #[test]
    fn test_normalize_list_keeps_order() {
        let rules = normalize(Declaration::from(vec![
            RuleDecl::new(always, "first"),
            RuleDecl::new(always, "second"),
            RuleDecl::new(always, "third"),
        ]));
        assert_eq!(messages(&rules), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_normalize_builder_keeps_invocation_order() {
        let rules = normalize(Declaration::builder(|add| {
            add.rule(always, "a").rule(always, "b");
            add.add((always, "c"));
        }));
        assert_eq!(messages(&rules), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_empty_builder() {
        assert!(normalize(Declaration::builder(|_| {})).is_empty());
    }

    #[test]
    fn test_normalize_keyed_uses_insertion_order() {
        let rules = normalize(Declaration::keyed(vec![
            ("zeta", RuleDecl::new(always, "z")),
            ("alpha", RuleDecl::malformed()),
            ("mid", RuleDecl::new(always, "m")),
        ]));
        assert_eq!(messages(&rules), vec!["z", "m"]);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let rules = normalize(Declaration::from(vec![
            RuleDecl::malformed(),
            RuleDecl::new(always, "kept"),
            RuleDecl::from_parts(None, Some("no predicate".into())),
        ]));
        assert_eq!(messages(&rules), vec!["kept"]);
    }

    #[test]
    fn test_missing_message_gets_default() {
        let predicate: Predicate = Rc::new(|_: &FieldValue| Ok::<_, PredicateError>(true));
        let rules = normalize(Declaration::from(vec![
            RuleDecl::from_parts(Some(predicate.clone()), None),
            RuleDecl::from_parts(Some(predicate), Some(String::new())),
        ]));
        assert_eq!(messages(&rules), vec![DEFAULT_MESSAGE, DEFAULT_MESSAGE]);
    }

    #[test]
    fn test_curried_arguments() {
        let longer_than = |value: &FieldValue, args: &[usize]| value.as_text().len() > args[0];
        let rules = normalize(Declaration::from(vec![RuleDecl::curried(
            longer_than,
            "too short",
            vec![3],
        )]));

        assert_eq!(rules[0].check(&FieldValue::from("abcd")), Ok(true));
        assert_eq!(rules[0].check(&FieldValue::from("abc")), Ok(false));
    }

    #[test]
    fn test_fallible_rule_reports_error() {
        let rule = Rule::fallible(|_| Err(PredicateError::new("host threw")), "never shown");
        assert_eq!(rule.check(&FieldValue::from("x")), Err(PredicateError::new("host threw")));
    }

    #[test]
    fn test_required() {
        assert!(required(&FieldValue::from("a")));
        assert!(!required(&FieldValue::from("  ")));
        assert!(!required(&FieldValue::Radio(None)));
        assert!(required(&FieldValue::Radio(Some("pro".into()))));
        assert!(!required(&FieldValue::Checkbox(vec![])));
    }

    #[test]
    fn test_adapters() {
        let email = text(rhtmx_validation_core::is_valid_email);
        assert!(email(&FieldValue::from("a@b.cl")));
        assert!(!email(&FieldValue::Radio(None)));

        let two = FieldValue::Checkbox(vec!["a".into(), "b".into()]);
        assert!(min_checked(2)(&two));
        assert!(!min_checked(3)(&two));
        assert!(max_checked(2)(&two));
        assert!(!max_checked(1)(&two));

        let select = select_valid("0");
        assert!(!select(&FieldValue::from("0")));
        assert!(select(&FieldValue::from("3")));
    }
}
