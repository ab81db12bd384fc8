// File: src/render.rs
// Purpose: Surface the error store through the configured output kind

use crate::config::{OutputKind, ValidatorConfig};
use crate::dom::{Document, ElementHandle};
use crate::registry::Registry;
use crate::store::ErrorStore;

/// Output side effect of the whole store; never mutates it
pub(crate) fn render_all<D: Document>(
    document: &D,
    kind: OutputKind,
    config: &ValidatorConfig,
    registry: &Registry<D>,
    store: &ErrorStore,
) {
    match kind {
        OutputKind::Array => {}
        OutputKind::Console => {
            for error in store {
                document.console_error(&error.message);
            }
        }
        OutputKind::Alert => {
            if !store.is_empty() {
                let joined: Vec<&str> = store.iter().map(|e| e.message.as_str()).collect();
                document.alert(&joined.join("\n"));
            }
        }
        OutputKind::ShortCircuit => {
            if let Some(first) = store.first() {
                document.alert(&first.message);
            }
        }
        OutputKind::Html => render_panel(document, config, store),
        OutputKind::Inputs => {
            for entry in registry.iter() {
                render_field(document, config, &entry.name, store);
            }
        }
    }
}

/// Reactive re-render after `field` was evaluated on its own
///
/// Only the surfaces that belong to the field are refreshed: its message
/// container for `inputs`, the shared panel for `html`. Blocking and log
/// kinds stay quiet until an explicit render.
pub(crate) fn render_after_event<D: Document>(
    document: &D,
    kind: OutputKind,
    config: &ValidatorConfig,
    field: &str,
    store: &ErrorStore,
) {
    match kind {
        OutputKind::Inputs => render_field(document, config, field, store),
        OutputKind::Html => render_panel(document, config, store),
        _ => {}
    }
}

/// Messages of `field` inside its `prefix + name` container
fn render_field<D: Document>(document: &D, config: &ValidatorConfig, field: &str, store: &ErrorStore) {
    let id = config.message_id(field);
    let Some(container) = document.element_by_id(&id) else {
        return;
    };

    let messages: Vec<&str> = store.for_field(field).map(|e| e.message.as_str()).collect();
    fill(&container, config, &messages);
}

fn render_panel<D: Document>(document: &D, config: &ValidatorConfig, store: &ErrorStore) {
    let Some(id) = config.message_container.as_deref() else {
        tracing::debug!("html output without a message container, nothing rendered");
        return;
    };
    let Some(container) = document.element_by_id(id) else {
        tracing::debug!(container = id, "message container not found, nothing rendered");
        return;
    };

    let messages: Vec<&str> = store.iter().map(|e| e.message.as_str()).collect();
    fill(&container, config, &messages);
}

fn fill<E: ElementHandle>(container: &E, config: &ValidatorConfig, messages: &[&str]) {
    if messages.is_empty() {
        container.clear_content();
        container.remove_class(&config.message_error_class);
        container.add_class(&config.message_success_class);
    } else {
        container.replace_messages(&config.message_tag, &config.message_error_class, messages);
        container.remove_class(&config.message_success_class);
        container.add_class(&config.message_error_class);
    }
}

/// Return every registered field and message surface to its
/// pre-validation look
pub(crate) fn reset_visuals<D: Document>(document: &D, config: &ValidatorConfig, registry: &Registry<D>) {
    for entry in registry.iter() {
        reset_field(document, config, &entry.name, &entry.elements);
    }

    if let Some(container) = config.message_container.as_deref().and_then(|id| document.element_by_id(id)) {
        empty(&container, config);
    }
}

/// Strip the input classes of `elements` and empty the field's own
/// message container
pub(crate) fn reset_field<D: Document>(document: &D, config: &ValidatorConfig, field: &str, elements: &[D::Element]) {
    for element in elements {
        element.remove_class(&config.input_error_class);
        element.remove_class(&config.input_success_class);
    }
    if let Some(container) = document.element_by_id(&config.message_id(field)) {
        empty(&container, config);
    }
}

fn empty<E: ElementHandle>(container: &E, config: &ValidatorConfig) {
    container.clear_content();
    container.remove_class(&config.message_error_class);
    container.remove_class(&config.message_success_class);
}
