//! crates/logging/src/logger/leaf.rs
//! Per-level logging calls. Each one queues a single action and returns the
//! handle for chaining.

use serde::Serialize;
use serde_json::Value;

use logging_sink::{Action, DirOptions, Level};

use super::Logger;
use crate::args::to_arg;

impl Logger {
    /// Queues `message` with trailing `args` at `level`.
    ///
    /// The message is scope-resolved now; the arguments are passed through
    /// unchanged.
    pub fn emit_with<I>(&self, level: Level, message: impl AsRef<str>, args: I) -> &Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.emit_values(level, message.as_ref(), args.into_iter().collect())
    }

    fn emit_values(&self, level: Level, message: &str, args: Vec<Value>) -> &Self {
        self.enqueue(Action::Emit {
            level,
            message: self.scoped_message(message),
            args,
        })
    }

    /// Queues a plain log line.
    pub fn log(&self, message: impl AsRef<str>) -> &Self {
        self.emit_values(Level::Log, message.as_ref(), Vec::new())
    }

    /// Queues an informational line.
    pub fn info(&self, message: impl AsRef<str>) -> &Self {
        self.emit_values(Level::Info, message.as_ref(), Vec::new())
    }

    /// Queues a warning.
    pub fn warn(&self, message: impl AsRef<str>) -> &Self {
        self.emit_values(Level::Warn, message.as_ref(), Vec::new())
    }

    /// Queues an error line.
    pub fn error(&self, message: impl AsRef<str>) -> &Self {
        self.emit_values(Level::Error, message.as_ref(), Vec::new())
    }

    /// Queues a debug line.
    pub fn debug(&self, message: impl AsRef<str>) -> &Self {
        self.emit_values(Level::Debug, message.as_ref(), Vec::new())
    }

    /// Queues a trace line.
    pub fn trace(&self, message: impl AsRef<str>) -> &Self {
        self.emit_values(Level::Trace, message.as_ref(), Vec::new())
    }

    /// Queues an assertion that reports `message` when `condition` is false.
    pub fn assert(&self, condition: bool, message: impl AsRef<str>) -> &Self {
        self.assert_with(condition, message, Vec::new())
    }

    /// Like [`assert`](Self::assert) with trailing arguments.
    pub fn assert_with<I>(&self, condition: bool, message: impl AsRef<str>, args: I) -> &Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.enqueue(Action::Assert {
            condition,
            message: self.scoped_message(message.as_ref()),
            args: args.into_iter().collect(),
        })
    }

    /// Queues a counter increment. Labels are not scoped.
    pub fn count(&self, label: impl Into<String>) -> &Self {
        self.enqueue(Action::Count {
            label: label.into(),
        })
    }

    /// Queues a timer start.
    pub fn time(&self, label: impl Into<String>) -> &Self {
        self.enqueue(Action::Time {
            label: label.into(),
        })
    }

    /// Queues a timer stop.
    pub fn time_end(&self, label: impl Into<String>) -> &Self {
        self.enqueue(Action::TimeEnd {
            label: label.into(),
        })
    }

    /// Queues a profile start.
    pub fn profile(&self, label: impl Into<String>) -> &Self {
        self.enqueue(Action::Profile {
            label: label.into(),
        })
    }

    /// Queues a stop of the most recent profile.
    pub fn profile_end(&self) -> &Self {
        self.enqueue(Action::ProfileEnd)
    }

    /// Queues a structured dump of `value` with default options.
    pub fn dir<T>(&self, value: &T) -> &Self
    where
        T: Serialize + ?Sized,
    {
        self.dir_with(value, DirOptions::default())
    }

    /// Queues a structured dump of `value`.
    pub fn dir_with<T>(&self, value: &T, options: DirOptions) -> &Self
    where
        T: Serialize + ?Sized,
    {
        self.enqueue(Action::Dir {
            value: to_arg(value),
            options,
        })
    }

    /// Queues a markup dump of `value`.
    pub fn dirxml<T>(&self, value: &T) -> &Self
    where
        T: Serialize + ?Sized,
    {
        self.enqueue(Action::DirXml {
            value: to_arg(value),
        })
    }

    /// Queues a screen clear.
    pub fn clear(&self) -> &Self {
        self.enqueue(Action::Clear)
    }
}
