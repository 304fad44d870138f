//! crates/logging/src/registry.rs
//! Title-keyed table of a node's open child groups.

use std::collections::HashMap;
use std::rc::Rc;

/// Maps scoped group titles to the open child registered under them.
///
/// The registry owns its children, so a group stays joinable by title after
/// every caller handle is gone. Entries leave only through [`release`].
///
/// [`release`]: Registry::release
#[derive(Debug)]
pub(crate) struct Registry<T> {
    open: HashMap<String, Rc<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            open: HashMap::new(),
        }
    }
}

impl<T> Registry<T> {
    /// Returns the child registered under `key`.
    pub(crate) fn lookup(&self, key: &str) -> Option<Rc<T>> {
        self.open.get(key).map(Rc::clone)
    }

    /// Registers `child` under `key`.
    pub(crate) fn insert(&mut self, key: String, child: &Rc<T>) {
        self.open.insert(key, Rc::clone(child));
    }

    /// Removes the entry for `key` if it still refers to `child`.
    #[must_use]
    pub(crate) fn release(&mut self, key: &str, child: &T) -> bool {
        let matches = self
            .open
            .get(key)
            .is_some_and(|entry| std::ptr::eq(Rc::as_ptr(entry), child));
        if matches {
            self.open.remove(key);
        }
        matches
    }

    /// Number of registered children.
    pub(crate) fn len(&self) -> usize {
        self.open.len()
    }
}
