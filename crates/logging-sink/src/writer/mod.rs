//! crates/logging-sink/src/writer/mod.rs
//! Terminal-style console rendering into a pair of writers.

use std::backtrace::Backtrace;
use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

use is_terminal::IsTerminal;
use serde_json::Value;

use crate::action::{DirOptions, GroupStyle, Level, Stream};
use crate::config::ConsoleConfig;
use crate::console::Console;
use crate::tallies::{Tallies, format_elapsed};

pub(crate) mod render;

use render::{indent_lines, render_arg, render_assertion, render_dir, render_message};

/// Escape sequence moving the cursor home and clearing to the end of screen.
pub const CLEAR_SEQUENCE: &str = "\x1b[1;1H\x1b[0J";

/// Console that renders output as indented text lines.
///
/// Regular output goes to `out`, warnings, errors, traces and failed
/// assertions go to `err`. Each open group indents subsequent lines by
/// [`ConsoleConfig::indent_width`] spaces.
///
/// The first I/O error reported by either writer is retained and every later
/// write is skipped until [`take_error`](Self::take_error) collects it.
///
/// ```
/// use logging_sink::{Console, GroupStyle, Level, WriterConsole};
///
/// let mut console = WriterConsole::new(Vec::new(), Vec::new());
/// console.group("outer", GroupStyle::Expanded);
/// console.emit(Level::Log, "inside", &[]);
/// console.group_end();
/// console.emit(Level::Log, "after", &[]);
///
/// let (out, _err) = console.into_inner();
/// assert_eq!(String::from_utf8(out).unwrap(), "outer\n  inside\nafter\n");
/// ```
pub struct WriterConsole<O, E> {
    out: O,
    err: E,
    config: ConsoleConfig,
    depth: usize,
    tallies: Tallies,
    error: Option<io::Error>,
}

/// [`WriterConsole`] bound to the process's standard streams.
pub type StdConsole = WriterConsole<Stdout, Stderr>;

impl StdConsole {
    /// Creates a console over stdout and stderr.
    ///
    /// ANSI output defaults to whether stdout is a terminal; the `GROUPLOG_*`
    /// environment variables override it.
    #[must_use]
    pub fn stdio() -> Self {
        let stdout = io::stdout();
        let mut config = ConsoleConfig::default().with_ansi(stdout.is_terminal());
        config.apply_env();
        Self::with_config(stdout, io::stderr(), config)
    }
}

impl<O, E> WriterConsole<O, E> {
    /// Creates a console with the default [`ConsoleConfig`].
    #[must_use]
    pub fn new(out: O, err: E) -> Self {
        Self::with_config(out, err, ConsoleConfig::default())
    }

    /// Creates a console with an explicit [`ConsoleConfig`].
    #[must_use]
    pub fn with_config(out: O, err: E, config: ConsoleConfig) -> Self {
        Self {
            out,
            err,
            config,
            depth: 0,
            tallies: Tallies::new(),
            error: None,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Current group nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Removes and returns the retained I/O error, re-enabling writes.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Borrows the output and error writers.
    #[must_use]
    pub const fn get_ref(&self) -> (&O, &E) {
        (&self.out, &self.err)
    }

    /// Consumes the console and returns the output and error writers.
    #[must_use]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O, E> WriterConsole<O, E>
where
    O: Write,
    E: Write,
{
    /// Flushes both writers.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    fn write_raw(&mut self, stream: Stream, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        let result = match stream {
            Stream::Stdout => self.out.write_all(bytes),
            Stream::Stderr => self.err.write_all(bytes),
        };
        if let Err(error) = result {
            tracing::debug!(target: "grouplog::console", %error, "console write failed");
            self.error = Some(error);
        }
    }

    fn write_line(&mut self, stream: Stream, text: &str) {
        let rendered = indent_lines(text, self.depth * self.config.indent_width);
        self.write_raw(stream, rendered.as_bytes());
    }
}

impl<O, E> Console for WriterConsole<O, E>
where
    O: Write,
    E: Write,
{
    fn group(&mut self, title: &str, _style: GroupStyle) {
        self.write_line(Stream::Stdout, title);
        self.depth += 1;
    }

    fn group_end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn emit(&mut self, level: Level, message: &str, args: &[Value]) {
        let mut text = render_message(message, args);
        if level == Level::Trace {
            text.insert_str(0, "Trace: ");
            if self.config.backtrace {
                text.push('\n');
                text.push_str(Backtrace::force_capture().to_string().trim_end());
            }
        }
        self.write_line(level.stream(), &text);
    }

    fn assert(&mut self, condition: bool, message: &str, args: &[Value]) {
        if condition {
            return;
        }
        let text = render_assertion(message, args);
        self.write_line(Stream::Stderr, &text);
    }

    fn count(&mut self, label: &str) {
        let count = self.tallies.count(label);
        self.write_line(Stream::Stdout, &format!("{label}: {count}"));
    }

    fn time(&mut self, label: &str) {
        if !self.tallies.start_timer(label) {
            self.write_line(
                Stream::Stderr,
                &format!("Warning: Label '{label}' already exists for time()"),
            );
        }
    }

    fn time_end(&mut self, label: &str) {
        match self.tallies.stop_timer(label) {
            Some(elapsed) => {
                let line = format!("{label}: {}", format_elapsed(elapsed));
                self.write_line(Stream::Stdout, &line);
            }
            None => self.write_line(
                Stream::Stderr,
                &format!("Warning: No such label '{label}' for time_end()"),
            ),
        }
    }

    fn profile(&mut self, label: &str) {
        self.tallies.start_profile(label);
        tracing::debug!(target: "grouplog::console", label, "profile started");
    }

    fn profile_end(&mut self) {
        match self.tallies.stop_profile() {
            Some(label) => tracing::debug!(target: "grouplog::console", %label, "profile finished"),
            None => tracing::debug!(target: "grouplog::console", "profile_end without active profile"),
        }
    }

    fn dir(&mut self, value: &Value, options: &DirOptions) {
        let text = render_dir(value, options);
        self.write_line(Stream::Stdout, &text);
    }

    fn dirxml(&mut self, value: &Value) {
        let text = render_arg(value);
        self.write_line(Stream::Stdout, &text);
    }

    fn clear(&mut self) {
        if self.config.ansi {
            self.write_raw(Stream::Stdout, CLEAR_SEQUENCE.as_bytes());
        }
    }
}

impl<O, E> fmt::Debug for WriterConsole<O, E>
where
    O: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterConsole")
            .field("out", &self.out)
            .field("err", &self.err)
            .field("config", &self.config)
            .field("depth", &self.depth)
            .finish()
    }
}
