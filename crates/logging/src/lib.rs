#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` adds hierarchical groups, scope prefixes and deferred output on
//! top of any [`Console`] backend from `logging-sink`. Code builds nested,
//! named groups of log statements (for example to show a call tree) and the
//! console only ever sees well-bracketed, contiguous group output.
//!
//! # Design
//!
//! A [`Logger`] is a cheap handle onto a node of a group tree:
//!
//! - The root owns the console and replays every call immediately.
//! - [`Logger::group`] opens a child whose calls are held in a queue of
//!   [`Action`]s. Opening a title that is already open joins that group.
//! - [`Logger::group_end`] appends the close marker and moves the whole queue
//!   into the parent as one [`Action::Block`]. The parent treats the block like
//!   any other call, so it reaches the console when the root is reached.
//! - [`Logger::scoped`] sets a prefix joined with [`scope::SCOPE_SEPARATOR`].
//!   Groups capture their parent's composed scope when they are opened.
//!
//! [`thread_local`] holds an optional per-thread default root, and
//! [`logged`] wraps functions so every call logs its arguments and result.
//!
//! # Invariants
//!
//! - Output order matches call order within one node.
//! - A closed group's output is contiguous in its parent's stream, at the
//!   position the group was closed.
//! - Closing is idempotent and every call on a closed node is ignored.
//! - Messages are scope-resolved when queued, never when replayed.
//!
//! # Errors
//!
//! Nothing in this crate fails. Dropped calls on closed groups are reported
//! through `tracing` under the `grouplog::queue` target; write failures are
//! the console's concern (see [`WriterConsole::take_error`]).
//!
//! # Examples
//!
//! ```
//! use logging::{Action, Level, Logger};
//!
//! let (root, recorder) = Logger::recording();
//! root.scoped("api");
//! root.grouped("GET /users", |request| {
//!     request.info("loading");
//!     request.grouped("db", |db| {
//!         db.debug("select");
//!     });
//! });
//!
//! assert_eq!(
//!     recorder.actions(),
//!     vec![
//!         Action::open_group("api | GET /users"),
//!         Action::emit(Level::Info, "api | loading"),
//!         Action::open_group("api | db"),
//!         Action::emit(Level::Debug, "api | select"),
//!         Action::CloseGroup,
//!         Action::CloseGroup,
//!     ]
//! );
//! ```

mod args;
mod instrument;
mod logger;
mod macros;
mod node;
mod registry;
pub mod scope;
pub mod thread_local;

pub use args::to_arg;
pub use instrument::{CallOptions, logged};
pub use logger::Logger;

pub use logging_sink::{
    Action, ConfigError, Console, ConsoleConfig, DirOptions, GroupStyle, Level, RecordingConsole,
    StdConsole, WriterConsole,
};
#[cfg(feature = "tracing")]
pub use logging_sink::{TracingConsole, init_tracing};
