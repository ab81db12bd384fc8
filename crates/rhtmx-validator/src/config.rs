// File: src/config.rs
// Purpose: Output kinds, evaluation modes and validator options

use crate::error::{Result, ValidatorError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel through which errors are surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// No side effect; errors are returned as data
    Array,
    /// All messages rendered inside one container element
    Html,
    /// Each field's messages rendered next to the field
    #[default]
    Inputs,
    /// One console line per error
    Console,
    /// All messages in a single blocking alert
    Alert,
    /// Only the first error, via alert
    ShortCircuit,
}

impl OutputKind {
    pub const ALL: [OutputKind; 6] = [
        OutputKind::Array,
        OutputKind::Html,
        OutputKind::Inputs,
        OutputKind::Console,
        OutputKind::Alert,
        OutputKind::ShortCircuit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Array => "array",
            OutputKind::Html => "html",
            OutputKind::Inputs => "inputs",
            OutputKind::Console => "console",
            OutputKind::Alert => "alert",
            OutputKind::ShortCircuit => "short-circuit",
        }
    }

    /// Evaluation mode used when the options do not force one
    ///
    /// Channels that show a single message per field stop at the first
    /// failing rule; summary channels collect every failure.
    pub fn default_mode(&self) -> EvaluationMode {
        match self {
            OutputKind::Inputs | OutputKind::ShortCircuit => EvaluationMode::ShortCircuit,
            OutputKind::Array | OutputKind::Html | OutputKind::Console | OutputKind::Alert => {
                EvaluationMode::Accumulate
            }
        }
    }

    /// `array` is the only kind that never writes to the page
    pub fn writes_to_dom(&self) -> bool {
        !matches!(self, OutputKind::Array)
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputKind {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self> {
        OutputKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidatorError::UnknownOutputKind(s.to_string()))
    }
}

/// Rule-chain policy for one field evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationMode {
    /// Stop at the first failing rule
    ShortCircuit,
    /// Run every rule and keep every failure
    Accumulate,
}

impl FromStr for EvaluationMode {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short-circuit" => Ok(EvaluationMode::ShortCircuit),
            "accumulate" => Ok(EvaluationMode::Accumulate),
            other => Err(ValidatorError::UnknownEvaluationMode(other.to_string())),
        }
    }
}

/// Validator options, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Re-validate a field on its input/change/blur events
    #[serde(default = "default_true")]
    pub reactive: bool,

    #[serde(default = "default_input_error_class")]
    pub input_error_class: String,

    #[serde(default = "default_input_success_class")]
    pub input_success_class: String,

    /// Id of the container used by the `html` output kind
    #[serde(default)]
    pub message_container: Option<String>,

    /// Tag of each rendered message element
    #[serde(default = "default_message_tag")]
    pub message_tag: String,

    #[serde(default = "default_message_error_class")]
    pub message_error_class: String,

    #[serde(default = "default_message_success_class")]
    pub message_success_class: String,

    /// Per-field message containers are looked up as `prefix + field name`
    #[serde(default = "default_message_id_prefix")]
    pub message_id_prefix: String,

    /// Trim single-value inputs before running the rules
    #[serde(default = "default_true")]
    pub trim_values: bool,

    /// Overrides the output kind's default evaluation mode
    #[serde(default)]
    pub evaluation: Option<EvaluationMode>,

    /// Form used for dirty-state tracking
    #[serde(default)]
    pub form_id: Option<String>,

    #[serde(default)]
    pub auto_track_dirty_state: bool,

    #[serde(default)]
    pub warn_on_unsaved_exit: bool,
}

// Default values
fn default_true() -> bool {
    true
}

fn default_input_error_class() -> String {
    "input-error".to_string()
}

fn default_input_success_class() -> String {
    "input-success".to_string()
}

fn default_message_tag() -> String {
    "div".to_string()
}

fn default_message_error_class() -> String {
    "message-error".to_string()
}

fn default_message_success_class() -> String {
    "message-success".to_string()
}

fn default_message_id_prefix() -> String {
    "error-".to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            reactive: true,
            input_error_class: default_input_error_class(),
            input_success_class: default_input_success_class(),
            message_container: None,
            message_tag: default_message_tag(),
            message_error_class: default_message_error_class(),
            message_success_class: default_message_success_class(),
            message_id_prefix: default_message_id_prefix(),
            trim_values: true,
            evaluation: None,
            form_id: None,
            auto_track_dirty_state: false,
            warn_on_unsaved_exit: false,
        }
    }
}

impl ValidatorConfig {
    /// Parse options from a JSON object; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn reactive(mut self, reactive: bool) -> Self {
        self.reactive = reactive;
        self
    }

    pub fn message_container(mut self, id: impl Into<String>) -> Self {
        self.message_container = Some(id.into());
        self
    }

    pub fn evaluation(mut self, mode: EvaluationMode) -> Self {
        self.evaluation = Some(mode);
        self
    }

    pub fn trim_values(mut self, trim: bool) -> Self {
        self.trim_values = trim;
        self
    }

    pub fn input_classes(mut self, error: impl Into<String>, success: impl Into<String>) -> Self {
        self.input_error_class = error.into();
        self.input_success_class = success.into();
        self
    }

    pub fn message_classes(mut self, error: impl Into<String>, success: impl Into<String>) -> Self {
        self.message_error_class = error.into();
        self.message_success_class = success.into();
        self
    }

    pub fn message_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.message_id_prefix = prefix.into();
        self
    }

    /// Track dirty state of `form_id`, optionally guarding page unload
    pub fn track_form(mut self, form_id: impl Into<String>, warn_on_unsaved_exit: bool) -> Self {
        self.form_id = Some(form_id.into());
        self.auto_track_dirty_state = true;
        self.warn_on_unsaved_exit = warn_on_unsaved_exit;
        self
    }

    /// Effective evaluation mode for an output kind
    pub fn mode_for(&self, kind: OutputKind) -> EvaluationMode {
        self.evaluation.unwrap_or_else(|| kind.default_mode())
    }

    /// Id of the message container of `field`
    pub fn message_id(&self, field: &str) -> String {
        format!("{}{}", self.message_id_prefix, field)
    }
}
