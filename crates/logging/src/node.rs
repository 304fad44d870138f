//! crates/logging/src/node.rs
//! Group nodes and their deferred action queues.
//!
//! The root node owns the console and replays every action as soon as it is
//! queued. Every other node holds its actions until it closes, at which point
//! the whole queue moves into the parent as one [`Action::Block`].

use std::cell::{Cell, RefCell};
use std::mem;
use std::rc::{Rc, Weak};

use logging_sink::{Action, Console, GroupStyle};

use crate::registry::Registry;
use crate::scope;

/// Where a node's output goes.
enum Link {
    /// The root: actions are replayed onto its console immediately.
    Root,
    /// A child: the closed queue is handed to `parent`, which then forgets
    /// the registry entry stored under `key`. The parent owns its open
    /// children, so the link back is weak.
    Child { parent: Weak<Node>, key: String },
    /// A child created under an already-closed parent; never emits.
    Detached,
}

struct NodeState {
    queue: Vec<Action>,
    children: Registry<Node>,
    closed: bool,
    own_scope: Option<String>,
    parent_scope: Option<String>,
    link: Link,
}

/// Console of a root node, kept outside [`NodeState`] so a console that logs
/// back through its own root can do so while a replay is in progress.
struct RootConsole {
    console: RefCell<Box<dyn Console>>,
    flushing: Cell<bool>,
}

/// Clears the flushing flag when a replay ends, including by unwinding.
struct FlushGuard<'a> {
    flushing: &'a Cell<bool>,
}

impl Drop for FlushGuard<'_> {
    fn drop(&mut self) {
        self.flushing.set(false);
    }
}

pub(crate) struct Node {
    state: RefCell<NodeState>,
    console: Option<RootConsole>,
}

impl Node {
    fn with_link(link: Link, parent_scope: Option<String>, closed: bool) -> Self {
        Self {
            state: RefCell::new(NodeState {
                queue: Vec::new(),
                children: Registry::default(),
                closed,
                own_scope: None,
                parent_scope,
                link,
            }),
            console: None,
        }
    }

    pub(crate) fn root(console: Box<dyn Console>) -> Rc<Self> {
        let mut node = Self::with_link(Link::Root, None, false);
        node.console = Some(RootConsole {
            console: RefCell::new(console),
            flushing: Cell::new(false),
        });
        Rc::new(node)
    }

    /// Appends `action`; the root replays and clears its queue right away.
    pub(crate) fn enqueue(&self, action: Action) {
        {
            let mut state = self.state.borrow_mut();
            if state.closed {
                tracing::debug!(target: "grouplog::queue", ?action, "dropping call on closed group");
                return;
            }
            state.queue.push(action);
        }
        self.flush();
    }

    /// Replays the root's queue onto its console.
    ///
    /// A call made from inside the console while a replay is running only
    /// queues its action; the running replay picks it up after the actions
    /// queued before it.
    fn flush(&self) {
        let Some(root) = &self.console else {
            return;
        };
        if root.flushing.replace(true) {
            tracing::trace!(target: "grouplog::queue", "call queued during replay");
            return;
        }
        let _guard = FlushGuard {
            flushing: &root.flushing,
        };

        loop {
            let batch = mem::take(&mut self.state.borrow_mut().queue);
            if batch.is_empty() {
                break;
            }
            let mut console = root.console.borrow_mut();
            for action in batch {
                action.dispatch(&mut **console);
            }
        }
    }

    /// Returns the open child registered under the scoped `title`, creating it
    /// if needed.
    pub(crate) fn open_child(self: &Rc<Self>, title: &str, style: GroupStyle) -> Rc<Self> {
        let key = self.scoped_message(title);
        let mut state = self.state.borrow_mut();

        if state.closed {
            tracing::debug!(target: "grouplog::queue", title = %key, "group opened on closed group");
            return Rc::new(Self::with_link(Link::Detached, None, true));
        }
        if let Some(existing) = state.children.lookup(&key) {
            tracing::trace!(target: "grouplog::queue", title = %key, "joining open group");
            return existing;
        }

        let parent_scope = scope::compose(state.parent_scope.as_deref(), state.own_scope.as_deref());
        let child = Rc::new(Self::with_link(
            Link::Child {
                parent: Rc::downgrade(self),
                key: key.clone(),
            },
            parent_scope,
            false,
        ));
        child.enqueue(Action::OpenGroup {
            title: key.clone(),
            style,
        });
        tracing::trace!(target: "grouplog::queue", title = %key, "group opened");
        state.children.insert(key, &child);
        child
    }

    /// Closes the node once; later calls are ignored.
    pub(crate) fn close(&self) {
        if self.is_closed() {
            return;
        }
        self.enqueue(Action::CloseGroup);

        let handoff = {
            let mut state = self.state.borrow_mut();
            let NodeState {
                queue,
                closed,
                link,
                ..
            } = &mut *state;
            *closed = true;
            match link {
                Link::Child { parent, key } => Some((parent.upgrade(), key.clone(), mem::take(queue))),
                Link::Root | Link::Detached => None,
            }
        };

        match handoff {
            Some((Some(parent), key, block)) => {
                tracing::trace!(target: "grouplog::queue", title = %key, actions = block.len(), "group closed");
                parent.enqueue(Action::Block(block));
                if !parent.state.borrow_mut().children.release(&key, self) {
                    tracing::debug!(target: "grouplog::queue", title = %key, "closed group was no longer registered");
                }
            }
            Some((None, key, _)) => {
                tracing::debug!(target: "grouplog::queue", title = %key, "group closed after its parent was dropped");
            }
            None => {}
        }
    }

    pub(crate) fn set_scope(&self, scope: String) {
        self.state.borrow_mut().own_scope = Some(scope);
    }

    /// The fully composed scope messages on this node are prefixed with.
    pub(crate) fn effective_scope(&self) -> Option<String> {
        let state = self.state.borrow();
        scope::compose(state.parent_scope.as_deref(), state.own_scope.as_deref())
    }

    pub(crate) fn scoped_message(&self, message: &str) -> String {
        let state = self.state.borrow();
        scope::scoped_message(
            state.parent_scope.as_deref(),
            state.own_scope.as_deref(),
            message,
        )
    }

    pub(crate) fn pending(&self) -> Vec<Action> {
        self.state.borrow().queue.clone()
    }

    pub(crate) fn pending_len(&self) -> usize {
        self.state.borrow().queue.len()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.state.borrow().closed
    }

    pub(crate) fn is_root(&self) -> bool {
        matches!(self.state.borrow().link, Link::Root)
    }

    pub(crate) fn open_children(&self) -> usize {
        self.state.borrow().children.len()
    }
}
