#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` defines the console capability set that the grouped logging
//! engine in the `logging` crate writes through, together with the concrete
//! backends that implement it.
//!
//! # Design
//!
//! Deferred console calls are described by the [`Action`] enum instead of
//! opaque closures. A group's queue is a `Vec<Action>`; a closed child group
//! travels to its parent as a single [`Action::Block`]. Replaying an action
//! onto a [`Console`] via [`Action::dispatch`] walks blocks depth-first, so the
//! backend only ever sees primitive calls.
//!
//! Backends:
//!
//! - [`RecordingConsole`] keeps every primitive call for inspection.
//! - [`WriterConsole`] renders indented text into two [`std::io::Write`]
//!   targets; [`StdConsole`] binds it to stdout and stderr.
//! - `TracingConsole` (feature `tracing`) forwards calls to `tracing` events.
//!
//! # Invariants
//!
//! - [`Action::dispatch`] replays block contents in insertion order and never
//!   reorders or drops primitives.
//! - Console methods never fail; [`WriterConsole`] retains the first I/O
//!   error for the caller to collect.
//!
//! # Examples
//!
//! Replay a recorded group block onto a text console:
//!
//! ```
//! use logging_sink::{Action, Level, WriterConsole};
//!
//! let block = Action::Block(vec![
//!     Action::open_group("request"),
//!     Action::emit(Level::Info, "accepted"),
//!     Action::CloseGroup,
//! ]);
//!
//! let mut console = WriterConsole::new(Vec::new(), Vec::new());
//! block.dispatch(&mut console);
//!
//! let (out, _) = console.into_inner();
//! assert_eq!(String::from_utf8(out).unwrap(), "request\n  accepted\n");
//! ```

mod action;
mod config;
mod console;
mod recording;
mod tallies;
#[cfg(feature = "tracing")]
mod tracing_console;
mod writer;

pub use action::{Action, DirOptions, GroupStyle, Level, ParseLevelError, Stream};
pub use config::{ANSI_ENV, BACKTRACE_ENV, ConfigError, ConsoleConfig, INDENT_ENV};
pub use console::Console;
pub use recording::RecordingConsole;
pub use tallies::{Tallies, format_elapsed};
#[cfg(feature = "tracing")]
pub use tracing_console::{
    GROUP_PATH_SEPARATOR, TracingConsole, init_tracing, init_tracing_with_filter,
};
pub use writer::{CLEAR_SEQUENCE, StdConsole, WriterConsole};
