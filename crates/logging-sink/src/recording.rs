//! crates/logging-sink/src/recording.rs
//! Console that records primitive calls for later inspection.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::action::{Action, DirOptions, GroupStyle, Level};
use crate::console::Console;

/// Console that stores every primitive call as an [`Action`].
///
/// Clones share the same buffer, so a test can hand one clone to a logger and
/// keep another to inspect what was flushed.
///
/// ```
/// use logging_sink::{Action, Console, Level, RecordingConsole};
///
/// let recorder = RecordingConsole::new();
/// let mut console = recorder.clone();
/// console.emit(Level::Info, "ready", &[]);
///
/// assert_eq!(recorder.drain(), vec![Action::emit(Level::Info, "ready")]);
/// assert!(recorder.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingConsole {
    actions: Rc<RefCell<Vec<Action>>>,
}

impl RecordingConsole {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded action in call order.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    /// Removes and returns every recorded action.
    pub fn drain(&self) -> Vec<Action> {
        self.actions.borrow_mut().drain(..).collect()
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.borrow().len()
    }

    /// Reports whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.borrow().is_empty()
    }

    fn record(&self, action: Action) {
        self.actions.borrow_mut().push(action);
    }
}

impl Console for RecordingConsole {
    fn group(&mut self, title: &str, style: GroupStyle) {
        self.record(Action::OpenGroup {
            title: title.to_owned(),
            style,
        });
    }

    fn group_end(&mut self) {
        self.record(Action::CloseGroup);
    }

    fn emit(&mut self, level: Level, message: &str, args: &[Value]) {
        self.record(Action::Emit {
            level,
            message: message.to_owned(),
            args: args.to_vec(),
        });
    }

    fn assert(&mut self, condition: bool, message: &str, args: &[Value]) {
        self.record(Action::Assert {
            condition,
            message: message.to_owned(),
            args: args.to_vec(),
        });
    }

    fn count(&mut self, label: &str) {
        self.record(Action::Count {
            label: label.to_owned(),
        });
    }

    fn time(&mut self, label: &str) {
        self.record(Action::Time {
            label: label.to_owned(),
        });
    }

    fn time_end(&mut self, label: &str) {
        self.record(Action::TimeEnd {
            label: label.to_owned(),
        });
    }

    fn profile(&mut self, label: &str) {
        self.record(Action::Profile {
            label: label.to_owned(),
        });
    }

    fn profile_end(&mut self) {
        self.record(Action::ProfileEnd);
    }

    fn dir(&mut self, value: &Value, options: &DirOptions) {
        self.record(Action::Dir {
            value: value.clone(),
            options: options.clone(),
        });
    }

    fn dirxml(&mut self, value: &Value) {
        self.record(Action::DirXml {
            value: value.clone(),
        });
    }

    fn clear(&mut self) {
        self.record(Action::Clear);
    }
}
