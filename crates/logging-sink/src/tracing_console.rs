//! crates/logging-sink/src/tracing_console.rs
//! Console backend that forwards grouped output to `tracing`.
//!
//! Each primitive becomes a `tracing` event under the `grouplog` target. The
//! titles of the currently open groups travel with every event as a `group`
//! field (`outer > inner`), so a subscriber can reconstruct the nesting that a
//! terminal console would show through indentation.
//!
//! ```rust,ignore
//! use logging_sink::{init_tracing, TracingConsole};
//!
//! init_tracing().expect("no subscriber installed yet");
//! let console = TracingConsole::new();
//! ```

use serde_json::Value;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::action::{DirOptions, GroupStyle, Level};
use crate::console::Console;
use crate::tallies::{Tallies, format_elapsed};
use crate::writer::render::{render_arg, render_assertion, render_dir, render_message};

/// Separator between group titles in the `group` field.
pub const GROUP_PATH_SEPARATOR: &str = " > ";

/// Console emitting `tracing` events.
#[derive(Debug, Default)]
pub struct TracingConsole {
    groups: Vec<String>,
    tallies: Tallies,
}

impl TracingConsole {
    /// Creates a console with no open groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles of the open groups joined with [`GROUP_PATH_SEPARATOR`].
    #[must_use]
    pub fn group_path(&self) -> String {
        self.groups.join(GROUP_PATH_SEPARATOR)
    }

    fn event(&self, level: Level, text: &str) {
        let group = self.group_path();
        match level {
            Level::Log | Level::Info => tracing::info!(target: "grouplog", group = %group, "{text}"),
            Level::Warn => tracing::warn!(target: "grouplog", group = %group, "{text}"),
            Level::Error => tracing::error!(target: "grouplog", group = %group, "{text}"),
            Level::Debug => tracing::debug!(target: "grouplog", group = %group, "{text}"),
            Level::Trace => tracing::trace!(target: "grouplog", group = %group, "{text}"),
        }
    }
}

impl Console for TracingConsole {
    fn group(&mut self, title: &str, style: GroupStyle) {
        let path = self.group_path();
        tracing::debug!(
            target: "grouplog",
            group = %path,
            collapsed = style.is_collapsed(),
            "group opened: {title}"
        );
        self.groups.push(title.to_owned());
    }

    fn group_end(&mut self) {
        if let Some(title) = self.groups.pop() {
            let path = self.group_path();
            tracing::debug!(target: "grouplog", group = %path, "group closed: {title}");
        }
    }

    fn emit(&mut self, level: Level, message: &str, args: &[Value]) {
        self.event(level, &render_message(message, args));
    }

    fn assert(&mut self, condition: bool, message: &str, args: &[Value]) {
        if !condition {
            self.event(Level::Error, &render_assertion(message, args));
        }
    }

    fn count(&mut self, label: &str) {
        let count = self.tallies.count(label);
        self.event(Level::Info, &format!("{label}: {count}"));
    }

    fn time(&mut self, label: &str) {
        if !self.tallies.start_timer(label) {
            self.event(
                Level::Warn,
                &format!("Label '{label}' already exists for time()"),
            );
        }
    }

    fn time_end(&mut self, label: &str) {
        match self.tallies.stop_timer(label) {
            Some(elapsed) => self.event(Level::Info, &format!("{label}: {}", format_elapsed(elapsed))),
            None => self.event(
                Level::Warn,
                &format!("No such label '{label}' for time_end()"),
            ),
        }
    }

    fn profile(&mut self, label: &str) {
        self.tallies.start_profile(label);
        self.event(Level::Debug, &format!("profile started: {label}"));
    }

    fn profile_end(&mut self) {
        if let Some(label) = self.tallies.stop_profile() {
            self.event(Level::Debug, &format!("profile finished: {label}"));
        }
    }

    fn dir(&mut self, value: &Value, options: &DirOptions) {
        self.event(Level::Info, &render_dir(value, options));
    }

    fn dirxml(&mut self, value: &Value) {
        self.event(Level::Info, &render_arg(value));
    }

    fn clear(&mut self) {
        self.event(Level::Debug, "console cleared");
    }
}

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
pub fn init_tracing() -> Result<(), TryInitError> {
    init_tracing_with_filter(EnvFilter::from_default_env())
}

/// Installs a global fmt subscriber with an explicit filter.
///
/// ```rust,ignore
/// use logging_sink::init_tracing_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(EnvFilter::new("grouplog=debug")).unwrap();
/// ```
pub fn init_tracing_with_filter(filter: EnvFilter) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::registry::LookupSpan;

    #[derive(Clone, Debug, PartialEq)]
    struct Captured {
        level: tracing::Level,
        group: String,
        message: String,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    #[derive(Default)]
    struct FieldVisitor {
        group: String,
        message: String,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            match field.name() {
                "message" => self.message = format!("{value:?}"),
                "group" => self.group = format!("{value:?}"),
                _ => {}
            }
        }
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() != "grouplog" {
                return;
            }
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.events.lock().expect("lock").push(Captured {
                level: *event.metadata().level(),
                group: visitor.group,
                message: visitor.message,
            });
        }
    }

    fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
        let layer = CaptureLayer::default();
        let events = Arc::clone(&layer.events);
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        let captured = events.lock().expect("lock").clone();
        captured
    }

    #[test]
    fn emit_maps_levels_and_group_path() {
        let events = capture(|| {
            let mut console = TracingConsole::new();
            console.group("outer", GroupStyle::Expanded);
            console.group("inner", GroupStyle::Collapsed);
            console.emit(Level::Warn, "careful", &[serde_json::json!(3)]);
            console.group_end();
            console.emit(Level::Log, "back", &[]);
            console.group_end();
        });

        let messages: Vec<_> = events
            .iter()
            .filter(|e| !e.message.starts_with("group "))
            .cloned()
            .collect();
        assert_eq!(
            messages,
            vec![
                Captured {
                    level: tracing::Level::WARN,
                    group: "outer > inner".to_owned(),
                    message: "careful 3".to_owned(),
                },
                Captured {
                    level: tracing::Level::INFO,
                    group: "outer".to_owned(),
                    message: "back".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn failed_assertions_become_errors() {
        let events = capture(|| {
            let mut console = TracingConsole::new();
            console.assert(true, "fine", &[]);
            console.assert(false, "broken", &[]);
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, tracing::Level::ERROR);
        assert_eq!(events[0].message, "Assertion failed: broken");
    }

    #[test]
    fn assertion_without_message_has_single_separator() {
        let events = capture(|| {
            TracingConsole::new().assert(false, "", &[serde_json::json!(1)]);
        });

        assert_eq!(events[0].message, "Assertion failed: 1");
    }

    #[test]
    fn clear_is_reported_as_debug_event() {
        let events = capture(|| {
            let mut console = TracingConsole::new();
            console.group("screen", GroupStyle::Expanded);
            console.clear();
        });

        let cleared = events.last().expect("clear event");
        assert_eq!(cleared.level, tracing::Level::DEBUG);
        assert_eq!(cleared.group, "screen");
        assert_eq!(cleared.message, "console cleared");
    }

    #[test]
    fn counters_and_missing_timers() {
        let events = capture(|| {
            let mut console = TracingConsole::new();
            console.count("n");
            console.count("n");
            console.time_end("never");
        });

        let messages: Vec<_> = events.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["n: 1", "n: 2", "No such label 'never' for time_end()"]
        );
    }

    #[test]
    fn group_path_tracks_nesting() {
        let mut console = TracingConsole::new();
        assert_eq!(console.group_path(), "");
        console.group("a", GroupStyle::Expanded);
        console.group("b", GroupStyle::Expanded);
        assert_eq!(console.group_path(), "a > b");
        console.group_end();
        console.group_end();
        console.group_end();
        assert_eq!(console.group_path(), "");
    }
}
