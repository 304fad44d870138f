//! crates/logging/src/logger/mod.rs
//! The public handle onto a group node.

use std::fmt;
use std::rc::Rc;

use logging_sink::{Action, Console, GroupStyle, RecordingConsole, StdConsole};

use crate::node::Node;

mod leaf;

/// Handle to a logging context: either the root or an open (or closed) group.
///
/// The root replays every call onto its console immediately. A group records
/// its calls and hands them to its parent as one contiguous block when
/// [`group_end`](Self::group_end) runs, so nested output always appears between
/// the group's open and close markers regardless of what siblings log in the
/// meantime.
///
/// Cloning a `Logger` yields another handle to the same node.
///
/// ```
/// use logging::{Action, Level, Logger};
///
/// let (root, recorder) = Logger::recording();
/// let request = root.group("request");
/// request.info("accepted");
/// root.log("unrelated");
/// request.group_end();
///
/// assert_eq!(
///     recorder.actions(),
///     vec![
///         Action::emit(Level::Log, "unrelated"),
///         Action::open_group("request"),
///         Action::emit(Level::Info, "accepted"),
///         Action::CloseGroup,
///     ]
/// );
/// ```
#[derive(Clone)]
pub struct Logger {
    node: Rc<Node>,
}

impl Logger {
    /// Creates a root logger that writes through `console`.
    pub fn new<C>(console: C) -> Self
    where
        C: Console + 'static,
    {
        Self {
            node: Node::root(Box::new(console)),
        }
    }

    /// Creates a root logger over stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(StdConsole::stdio())
    }

    /// Creates a root logger over a [`RecordingConsole`] and returns both.
    #[must_use]
    pub fn recording() -> (Self, RecordingConsole) {
        let recorder = RecordingConsole::new();
        (Self::new(recorder.clone()), recorder)
    }

    /// Creates a root logger that forwards to `tracing`.
    #[cfg(feature = "tracing")]
    #[must_use]
    pub fn tracing() -> Self {
        Self::new(logging_sink::TracingConsole::new())
    }

    /// Sets this node's own scope and returns the same handle.
    ///
    /// Calls already queued keep the scope they were made with. Groups opened
    /// afterwards inherit the new scope; groups opened before do not.
    pub fn scoped(&self, scope: impl Into<String>) -> &Self {
        self.node.set_scope(scope.into());
        self
    }

    /// The composed scope prefixed to messages logged through this handle.
    #[must_use]
    pub fn scope(&self) -> Option<String> {
        self.node.effective_scope()
    }

    /// Prefixes `message` with this node's composed scope.
    #[must_use]
    pub fn scoped_message(&self, message: &str) -> String {
        self.node.scoped_message(message)
    }

    /// Opens an expanded group titled `title`, or joins it if already open.
    pub fn group(&self, title: impl AsRef<str>) -> Self {
        self.group_with_style(title, GroupStyle::Expanded)
    }

    /// Opens a collapsed group titled `title`, or joins it if already open.
    pub fn group_collapsed(&self, title: impl AsRef<str>) -> Self {
        self.group_with_style(title, GroupStyle::Collapsed)
    }

    /// Opens a group with an explicit style, or joins it if already open.
    ///
    /// The title is scope-resolved first; the resolved title is both what the
    /// console shows and the key under which the open group can be joined.
    /// Joining keeps the style the group was first opened with.
    pub fn group_with_style(&self, title: impl AsRef<str>, style: impl Into<GroupStyle>) -> Self {
        Self {
            node: self.node.open_child(title.as_ref(), style.into()),
        }
    }

    /// Runs `body` inside an expanded group and closes the group afterwards.
    pub fn grouped<R>(&self, title: impl AsRef<str>, body: impl FnOnce(&Self) -> R) -> R {
        self.grouped_with_style(title, GroupStyle::Expanded, body)
    }

    /// Runs `body` inside a collapsed group and closes the group afterwards.
    pub fn grouped_collapsed<R>(&self, title: impl AsRef<str>, body: impl FnOnce(&Self) -> R) -> R {
        self.grouped_with_style(title, GroupStyle::Collapsed, body)
    }

    /// Runs `body` inside a group with an explicit style and closes it afterwards.
    pub fn grouped_with_style<R>(
        &self,
        title: impl AsRef<str>,
        style: impl Into<GroupStyle>,
        body: impl FnOnce(&Self) -> R,
    ) -> R {
        let group = self.group_with_style(title, style);
        let result = body(&group);
        group.group_end();
        result
    }

    /// Closes this group and hands its output to the parent.
    ///
    /// Closing twice is a no-op. Every call on a closed handle is ignored.
    pub fn group_end(&self) {
        self.node.close();
    }

    /// Actions queued on this node and not yet handed on.
    ///
    /// Always empty for the root, which replays as it goes.
    #[must_use]
    pub fn pending(&self) -> Vec<Action> {
        self.node.pending()
    }

    /// Reports whether [`group_end`](Self::group_end) has run on this node.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.node.is_closed()
    }

    /// Reports whether this handle refers to a root logger.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.node.is_root()
    }

    /// Number of child groups currently open directly under this node.
    #[must_use]
    pub fn open_groups(&self) -> usize {
        self.node.open_children()
    }

    /// Reports whether both handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    fn enqueue(&self, action: Action) -> &Self {
        self.node.enqueue(action);
        self
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("root", &self.is_root())
            .field("closed", &self.is_closed())
            .field("scope", &self.scope())
            .field("pending", &self.node.pending_len())
            .finish()
    }
}
