//! crates/logging/src/thread_local.rs
//! Thread-local slot for the default root logger.
//!
//! Nothing is installed implicitly. A program calls [`init`] once at start-up
//! with the root it wants shared; code that has no logger passed to it reaches
//! that root through [`current`] or [`with_current`]. Tests install and
//! [`reset`] their own roots without affecting other threads.

use std::cell::RefCell;

use crate::Logger;

thread_local! {
    static DEFAULT_ROOT: RefCell<Option<Logger>> = const { RefCell::new(None) };
}

/// Installs `logger` as this thread's default root, returning the previous one.
pub fn init(logger: Logger) -> Option<Logger> {
    DEFAULT_ROOT.with(|slot| slot.borrow_mut().replace(logger))
}

/// Returns a handle to this thread's default root, if one is installed.
#[must_use]
pub fn current() -> Option<Logger> {
    DEFAULT_ROOT.with(|slot| slot.borrow().clone())
}

/// Runs `f` with this thread's default root.
///
/// Returns `None` without calling `f` when no root is installed.
pub fn with_current<R>(f: impl FnOnce(&Logger) -> R) -> Option<R> {
    current().map(|logger| f(&logger))
}

/// Removes this thread's default root and returns it.
pub fn reset() -> Option<Logger> {
    DEFAULT_ROOT.with(|slot| slot.borrow_mut().take())
}
