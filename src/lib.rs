#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Hierarchical grouped console logging.
//!
//! `grouplog` re-exports the grouping engine from the `logging` crate and the
//! console backends from `logging-sink`, so applications depend on a single
//! crate:
//!
//! ```
//! use grouplog::Logger;
//!
//! let logger = Logger::stdio();
//! logger.scoped("demo").grouped("startup", |group| {
//!     group.info("configuration loaded");
//! });
//! ```
//!
//! Enable the `tracing` feature for [`TracingConsole`] and [`init_tracing`],
//! and `serde` to (de)serialize [`Action`] queues and [`ConsoleConfig`].

pub use logging::{CallOptions, Logger, emit, logged, scope, thread_local, to_arg};
pub use logging_sink::{
    ANSI_ENV, Action, BACKTRACE_ENV, CLEAR_SEQUENCE, ConfigError, Console, ConsoleConfig,
    DirOptions, GroupStyle, INDENT_ENV, Level, ParseLevelError, RecordingConsole, StdConsole,
    Stream, Tallies, WriterConsole, format_elapsed,
};
#[cfg(feature = "tracing")]
pub use logging_sink::{
    GROUP_PATH_SEPARATOR, TracingConsole, init_tracing, init_tracing_with_filter,
};
