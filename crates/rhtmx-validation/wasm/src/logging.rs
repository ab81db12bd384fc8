// File: src/logging.rs
// Purpose: Forward tracing events to the browser console

use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Layer writing each event as one console line, at the console level
/// matching the event level
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut line = LineVisitor::default();
        event.record(&mut line);

        let text = JsValue::from_str(&format!("{} {}: {}{}", meta.level(), meta.target(), line.message, line.fields));
        match *meta.level() {
            Level::ERROR => console::error_1(&text),
            Level::WARN => console::warn_1(&text),
            Level::INFO => console::info_1(&text),
            _ => console::debug_1(&text),
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

/// Install the console layer as the global subscriber; a second call is
/// ignored
pub fn init_console_logging(max_level: Level) {
    let installed = tracing_subscriber::registry()
        .with(ConsoleLayer.with_filter(LevelFilter::from_level(max_level)))
        .try_init();
    if installed.is_err() {
        tracing::debug!("a global subscriber is already set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_events_reach_the_console_layer() {
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(field = "email", "predicate failed");
            tracing::debug!(rules = 2, "field registered");
        });
    }

    #[wasm_bindgen_test]
    fn test_init_twice_is_harmless() {
        init_console_logging(Level::DEBUG);
        init_console_logging(Level::INFO);
    }
}
