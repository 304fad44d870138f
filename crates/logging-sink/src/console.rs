//! crates/logging-sink/src/console.rs
//! The platform console capability set consumed by the group engine.

use serde_json::Value;

use crate::action::{DirOptions, GroupStyle, Level};

/// Primitive console operations a backend must provide.
///
/// Methods are infallible. Backends that can fail (for example, because an
/// underlying writer reports an I/O error) record the failure themselves and
/// expose it through their own API, see
/// [`WriterConsole::take_error`](crate::WriterConsole::take_error).
pub trait Console {
    /// Opens a group titled `title`.
    fn group(&mut self, title: &str, style: GroupStyle);

    /// Closes the innermost open group.
    fn group_end(&mut self);

    /// Emits `message` followed by `args` at `level`.
    fn emit(&mut self, level: Level, message: &str, args: &[Value]);

    /// Reports `message` and `args` when `condition` is false.
    fn assert(&mut self, condition: bool, message: &str, args: &[Value]);

    /// Increments and reports the counter named `label`.
    fn count(&mut self, label: &str);

    /// Starts the timer named `label`.
    fn time(&mut self, label: &str);

    /// Stops the timer named `label` and reports the elapsed time.
    fn time_end(&mut self, label: &str);

    /// Starts a profile named `label`.
    fn profile(&mut self, label: &str);

    /// Stops the most recently started profile.
    fn profile_end(&mut self);

    /// Dumps a structured value.
    fn dir(&mut self, value: &Value, options: &DirOptions);

    /// Dumps a markup value.
    fn dirxml(&mut self, value: &Value);

    /// Clears the screen.
    fn clear(&mut self);
}

impl<C> Console for Box<C>
where
    C: Console + ?Sized,
{
    fn group(&mut self, title: &str, style: GroupStyle) {
        (**self).group(title, style);
    }

    fn group_end(&mut self) {
        (**self).group_end();
    }

    fn emit(&mut self, level: Level, message: &str, args: &[Value]) {
        (**self).emit(level, message, args);
    }

    fn assert(&mut self, condition: bool, message: &str, args: &[Value]) {
        (**self).assert(condition, message, args);
    }

    fn count(&mut self, label: &str) {
        (**self).count(label);
    }

    fn time(&mut self, label: &str) {
        (**self).time(label);
    }

    fn time_end(&mut self, label: &str) {
        (**self).time_end(label);
    }

    fn profile(&mut self, label: &str) {
        (**self).profile(label);
    }

    fn profile_end(&mut self) {
        (**self).profile_end();
    }

    fn dir(&mut self, value: &Value, options: &DirOptions) {
        (**self).dir(value, options);
    }

    fn dirxml(&mut self, value: &Value) {
        (**self).dirxml(value);
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}
