//! crates/logging-sink/src/action.rs
//! Tagged vocabulary of deferred console calls.
//!
//! Every logging call recorded by a group is stored as an [`Action`] rather
//! than an opaque closure. Queues built from actions can therefore be compared
//! structurally in tests and replayed onto any [`Console`].

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::console::Console;

/// Severity of an emitted message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Plain log output.
    Log,
    /// Informational output.
    Info,
    /// Warning output.
    Warn,
    /// Error output.
    Error,
    /// Debug output.
    Debug,
    /// Trace output, prefixed with `Trace:` by terminal consoles.
    Trace,
}

/// Output stream a console routes a [`Level`] to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stream {
    /// Regular output.
    Stdout,
    /// Diagnostic output.
    Stderr,
}

impl Level {
    /// All levels, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Log,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Debug,
        Self::Trace,
    ];

    /// Returns the lowercase method name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Returns the stream terminal consoles write this level to.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Log | Self::Info | Self::Debug => Stream::Stdout,
            Self::Warn | Self::Error | Self::Trace => Stream::Stderr,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Level`] name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}

/// Controls whether an opened group is rendered expanded or collapsed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GroupStyle {
    /// Group contents are shown.
    #[default]
    Expanded,
    /// Group contents are hidden until expanded, where the console supports it.
    Collapsed,
}

impl GroupStyle {
    /// Reports whether the style is [`GroupStyle::Collapsed`].
    ///
    /// ```
    /// use logging_sink::GroupStyle;
    ///
    /// assert!(GroupStyle::Collapsed.is_collapsed());
    /// assert!(!GroupStyle::Expanded.is_collapsed());
    /// ```
    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }
}

impl From<bool> for GroupStyle {
    /// `true` selects [`GroupStyle::Collapsed`].
    fn from(collapsed: bool) -> Self {
        if collapsed {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }
}

impl From<GroupStyle> for bool {
    fn from(style: GroupStyle) -> Self {
        style.is_collapsed()
    }
}

/// Rendering options for structured object dumps.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DirOptions {
    /// Nesting depth shown before containers are abbreviated; `None` is unlimited.
    pub depth: Option<usize>,
    /// Pretty-print across multiple lines.
    pub pretty: bool,
}

impl Default for DirOptions {
    fn default() -> Self {
        Self {
            depth: Some(2),
            pretty: false,
        }
    }
}

impl DirOptions {
    /// Options showing every nesting level.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            depth: None,
            pretty: false,
        }
    }

    /// Sets the nesting depth.
    #[must_use]
    pub const fn with_depth(mut self, depth: Option<usize>) -> Self {
        self.depth = depth;
        self
    }

    /// Enables or disables pretty printing.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// A single deferred console call.
///
/// [`Action::Block`] holds the complete queue of a closed child group. It is
/// stored as one entry in the parent's queue so the child's output stays
/// contiguous no matter what the parent records afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Open a group titled `title`.
    OpenGroup {
        /// Already scope-resolved group title.
        title: String,
        /// Expanded or collapsed.
        style: GroupStyle,
    },
    /// Close the innermost open group.
    CloseGroup,
    /// Emit a message at `level`.
    Emit {
        /// Severity.
        level: Level,
        /// Already scope-resolved message.
        message: String,
        /// Trailing arguments, passed through unchanged.
        args: Vec<Value>,
    },
    /// Report `message` when `condition` is false.
    Assert {
        /// Asserted condition.
        condition: bool,
        /// Already scope-resolved message.
        message: String,
        /// Trailing arguments, passed through unchanged.
        args: Vec<Value>,
    },
    /// Increment and print the counter named `label`.
    Count {
        /// Counter name.
        label: String,
    },
    /// Start the timer named `label`.
    Time {
        /// Timer name.
        label: String,
    },
    /// Stop and print the timer named `label`.
    TimeEnd {
        /// Timer name.
        label: String,
    },
    /// Start a profile named `label`.
    Profile {
        /// Profile name.
        label: String,
    },
    /// Stop the most recent profile.
    ProfileEnd,
    /// Dump a structured value.
    Dir {
        /// Value to render.
        value: Value,
        /// Rendering options.
        options: DirOptions,
    },
    /// Dump a markup value.
    DirXml {
        /// Value to render.
        value: Value,
    },
    /// Clear the screen.
    Clear,
    /// The replayable queue of a closed child group.
    Block(Vec<Action>),
}

impl Action {
    /// Shorthand for an expanded [`Action::OpenGroup`].
    #[must_use]
    pub fn open_group(title: impl Into<String>) -> Self {
        Self::OpenGroup {
            title: title.into(),
            style: GroupStyle::Expanded,
        }
    }

    /// Shorthand for a collapsed [`Action::OpenGroup`].
    #[must_use]
    pub fn open_group_collapsed(title: impl Into<String>) -> Self {
        Self::OpenGroup {
            title: title.into(),
            style: GroupStyle::Collapsed,
        }
    }

    /// Shorthand for an [`Action::Emit`] without trailing arguments.
    #[must_use]
    pub fn emit(level: Level, message: impl Into<String>) -> Self {
        Self::Emit {
            level,
            message: message.into(),
            args: Vec::new(),
        }
    }

    /// Replays the action onto `console`.
    ///
    /// Blocks replay their contents depth-first, in insertion order.
    pub fn dispatch<C>(&self, console: &mut C)
    where
        C: Console + ?Sized,
    {
        match self {
            Self::OpenGroup { title, style } => console.group(title, *style),
            Self::CloseGroup => console.group_end(),
            Self::Emit {
                level,
                message,
                args,
            } => console.emit(*level, message, args),
            Self::Assert {
                condition,
                message,
                args,
            } => console.assert(*condition, message, args),
            Self::Count { label } => console.count(label),
            Self::Time { label } => console.time(label),
            Self::TimeEnd { label } => console.time_end(label),
            Self::Profile { label } => console.profile(label),
            Self::ProfileEnd => console.profile_end(),
            Self::Dir { value, options } => console.dir(value, options),
            Self::DirXml { value } => console.dirxml(value),
            Self::Clear => console.clear(),
            Self::Block(actions) => {
                for action in actions {
                    action.dispatch(console);
                }
            }
        }
    }

    /// Returns the primitive actions this action replays, with blocks expanded.
    #[must_use]
    pub fn flatten(&self) -> Vec<Self> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<Self>) {
        match self {
            Self::Block(actions) => {
                for action in actions {
                    action.flatten_into(out);
                }
            }
            other => out.push(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingConsole;
    use proptest::prelude::*;

    fn primitive() -> impl Strategy<Value = Action> {
        prop_oneof![
            "[a-z]{0,6}".prop_map(|message| Action::emit(Level::Log, message)),
            "[a-z]{1,4}".prop_map(|label| Action::Count { label }),
            "[a-z]{1,4}".prop_map(Action::open_group),
            Just(Action::CloseGroup),
        ]
    }

    fn action_tree() -> impl Strategy<Value = Action> {
        primitive().prop_recursive(4, 48, 5, |inner| {
            proptest::collection::vec(inner, 0..5).prop_map(Action::Block)
        })
    }

    proptest! {
        #[test]
        fn dispatch_replays_exactly_the_flattened_actions(action in action_tree()) {
            let mut console = RecordingConsole::new();
            action.dispatch(&mut console);
            prop_assert_eq!(console.actions(), action.flatten());
        }

        #[test]
        fn flatten_leaves_no_blocks(action in action_tree()) {
            prop_assert!(action.flatten().iter().all(|a| !matches!(a, Action::Block(_))));
        }

        #[test]
        fn nesting_in_a_block_keeps_order(actions in proptest::collection::vec(action_tree(), 0..6)) {
            let expected: Vec<Action> = actions.iter().flat_map(Action::flatten).collect();
            prop_assert_eq!(Action::Block(actions).flatten(), expected);
        }
    }

    #[test]
    fn level_streams_match_terminal_conventions() {
        assert_eq!(Level::Log.stream(), Stream::Stdout);
        assert_eq!(Level::Info.stream(), Stream::Stdout);
        assert_eq!(Level::Debug.stream(), Stream::Stdout);
        assert_eq!(Level::Warn.stream(), Stream::Stderr);
        assert_eq!(Level::Error.stream(), Stream::Stderr);
        assert_eq!(Level::Trace.stream(), Stream::Stderr);
    }

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("trace".parse::<Level>(), Ok(Level::Trace));
        assert_eq!(
            "verbose".parse::<Level>(),
            Err(ParseLevelError("verbose".to_owned()))
        );
    }

    #[test]
    fn level_display_uses_method_name() {
        for level in Level::ALL {
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn group_style_bool_conversions() {
        assert_eq!(GroupStyle::from(true), GroupStyle::Collapsed);
        assert_eq!(GroupStyle::from(false), GroupStyle::Expanded);
        assert!(bool::from(GroupStyle::Collapsed));
        assert_eq!(GroupStyle::default(), GroupStyle::Expanded);
    }

    #[test]
    fn flatten_expands_nested_blocks_in_order() {
        let inner = Action::Block(vec![
            Action::open_group("inner"),
            Action::emit(Level::Info, "b"),
            Action::CloseGroup,
        ]);
        let outer = Action::Block(vec![
            Action::open_group("outer"),
            Action::emit(Level::Log, "a"),
            inner,
            Action::emit(Level::Log, "c"),
            Action::CloseGroup,
        ]);

        assert_eq!(
            outer.flatten(),
            vec![
                Action::open_group("outer"),
                Action::emit(Level::Log, "a"),
                Action::open_group("inner"),
                Action::emit(Level::Info, "b"),
                Action::CloseGroup,
                Action::emit(Level::Log, "c"),
                Action::CloseGroup,
            ]
        );
    }

    #[test]
    fn dispatch_replays_block_onto_console() {
        let block = Action::Block(vec![
            Action::open_group_collapsed("g"),
            Action::Count {
                label: "hits".to_owned(),
            },
            Action::CloseGroup,
        ]);
        let mut console = RecordingConsole::new();
        block.dispatch(&mut console);

        assert_eq!(console.actions(), block.flatten());
    }

    #[test]
    fn empty_block_replays_nothing() {
        let mut console = RecordingConsole::new();
        Action::Block(Vec::new()).dispatch(&mut console);
        assert!(console.is_empty());
    }

    #[test]
    fn dir_options_builders() {
        let options = DirOptions::default().with_depth(Some(5)).with_pretty(true);
        assert_eq!(options.depth, Some(5));
        assert!(options.pretty);
        assert_eq!(DirOptions::unlimited().depth, None);
    }
}
