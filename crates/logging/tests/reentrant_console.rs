//! Integration tests for consoles that log back through their own root.
//!
//! A console may report its own problems through the default root while the
//! root is replaying onto it. Those calls must queue behind the replay instead
//! of failing.

use logging::{Action, Console, DirOptions, GroupStyle, Level, Logger, RecordingConsole, thread_local};
use serde_json::Value;

/// Records every call and reports each error through the default root.
struct Reporting(RecordingConsole);

impl Console for Reporting {
    fn group(&mut self, title: &str, style: GroupStyle) {
        self.0.group(title, style);
    }

    fn group_end(&mut self) {
        self.0.group_end();
    }

    fn emit(&mut self, level: Level, message: &str, args: &[Value]) {
        self.0.emit(level, message, args);
        if level == Level::Error {
            thread_local::with_current(|root| {
                root.debug(format!("reported: {message}"));
            });
        }
    }

    fn assert(&mut self, condition: bool, message: &str, args: &[Value]) {
        self.0.assert(condition, message, args);
    }

    fn count(&mut self, label: &str) {
        self.0.count(label);
    }

    fn time(&mut self, label: &str) {
        self.0.time(label);
    }

    fn time_end(&mut self, label: &str) {
        self.0.time_end(label);
    }

    fn profile(&mut self, label: &str) {
        self.0.profile(label);
    }

    fn profile_end(&mut self) {
        self.0.profile_end();
    }

    fn dir(&mut self, value: &Value, options: &DirOptions) {
        self.0.dir(value, options);
    }

    fn dirxml(&mut self, value: &Value) {
        self.0.dirxml(value);
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

fn reporting_root() -> (Logger, RecordingConsole) {
    let recorder = RecordingConsole::new();
    let root = Logger::new(Reporting(recorder.clone()));
    thread_local::init(root.clone());
    (root, recorder)
}

// ============================================================================
// Root Replay Re-entry
// ============================================================================

/// Verifies a console logging through the root during replay does not panic.
#[test]
fn console_reporting_through_root_is_queued_after_current_call() {
    let (root, recorder) = reporting_root();

    root.error("boom").log("after");

    assert_eq!(
        recorder.actions(),
        vec![
            Action::emit(Level::Error, "boom"),
            Action::emit(Level::Debug, "reported: boom"),
            Action::emit(Level::Log, "after"),
        ]
    );
    thread_local::reset();
}

/// Verifies re-entrant calls land after the whole block being replayed.
#[test]
fn report_from_inside_a_block_follows_the_block() {
    let (root, recorder) = reporting_root();

    root.grouped("job", |job| {
        job.error("failed");
        job.info("cleanup");
    });

    assert_eq!(
        recorder.actions(),
        vec![
            Action::open_group("job"),
            Action::emit(Level::Error, "failed"),
            Action::emit(Level::Info, "cleanup"),
            Action::CloseGroup,
            Action::emit(Level::Debug, "reported: failed"),
        ]
    );
    thread_local::reset();
}

/// Verifies the root keeps replaying normally after a re-entrant call.
#[test]
fn root_recovers_after_reentrant_replay() {
    let (root, recorder) = reporting_root();

    root.error("first");
    recorder.drain();
    root.info("plain");

    assert_eq!(recorder.actions(), vec![Action::emit(Level::Info, "plain")]);
    assert!(root.pending().is_empty());
    thread_local::reset();
}
