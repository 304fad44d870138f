//! crates/logging/src/instrument.rs
//! Wrapping functions so every call logs its arguments and result.

use serde::Serialize;

use logging_sink::GroupStyle;

use crate::Logger;
use crate::args::to_arg;

/// How an instrumented call is presented.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CallOptions {
    /// Title of the group each call is wrapped in; `None` logs a single line.
    pub group_title: Option<String>,
    /// Style of the per-call group.
    pub style: GroupStyle,
}

impl CallOptions {
    /// One line per call, after it returns.
    #[must_use]
    pub fn inline() -> Self {
        Self::default()
    }

    /// Each call runs inside an expanded group titled `title`.
    #[must_use]
    pub fn grouped(title: impl Into<String>) -> Self {
        Self {
            group_title: Some(title.into()),
            style: GroupStyle::Expanded,
        }
    }

    /// Switches the per-call group to collapsed.
    #[must_use]
    pub fn collapsed(mut self) -> Self {
        self.style = GroupStyle::Collapsed;
        self
    }
}

/// Wraps `f` so every call is logged through `logger`.
///
/// Arguments and results are rendered as compact JSON. Multiple arguments are
/// passed as a tuple, which renders as an array.
///
/// Inline calls log `Call: <label>(<args>) => <result>` once `f` returns.
/// Grouped calls open the group, log `Call: <label>(<args>)`, run `f`, log
/// ` => <result>` and close the group, so anything `f` logs into the same
/// group lands between the two lines.
///
/// ```
/// use logging::{Action, CallOptions, Level, Logger, logged};
///
/// let (root, recorder) = Logger::recording();
/// let mut add = logged(&root, "Math.add", CallOptions::inline(), |(a, b): (i32, i32)| a + b);
///
/// assert_eq!(add((2, 3)), 5);
/// assert_eq!(
///     recorder.actions(),
///     vec![Action::emit(Level::Log, "Call: Math.add([2,3]) => 5")]
/// );
/// ```
pub fn logged<A, R, F>(
    logger: &Logger,
    label: impl Into<String>,
    options: CallOptions,
    mut f: F,
) -> impl FnMut(A) -> R
where
    A: Serialize,
    R: Serialize,
    F: FnMut(A) -> R,
{
    let logger = logger.clone();
    let label = label.into();

    move |args: A| {
        let call = format!("Call: {label}({})", to_arg(&args));
        match &options.group_title {
            Some(title) => {
                let group = logger.group_with_style(title, options.style);
                group.log(&call);
                let result = f(args);
                group.log(format!(" => {}", to_arg(&result)));
                group.group_end();
                result
            }
            None => {
                let result = f(args);
                logger.log(format!("{call} => {}", to_arg(&result)));
                result
            }
        }
    }
}
