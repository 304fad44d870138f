//! crates/logging/src/macros.rs
//! Variadic logging macro.

/// Queues a message at a level with any number of serializable arguments.
///
/// Trailing arguments are converted with [`to_arg`](crate::to_arg) and passed
/// to [`Logger::emit_with`](crate::Logger::emit_with). The macro evaluates to
/// the logger reference, so calls can be chained.
///
/// # Example
/// ```
/// use logging::{Action, Level, Logger, emit};
/// use serde_json::json;
///
/// let (root, recorder) = Logger::recording();
/// emit!(root, Warn, "retrying", 3, "times");
///
/// assert_eq!(
///     recorder.actions(),
///     vec![Action::Emit {
///         level: Level::Warn,
///         message: "retrying".to_owned(),
///         args: vec![json!(3), json!("times")],
///     }]
/// );
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $level:ident, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.emit_with(
            $crate::Level::$level,
            $message,
            ::std::vec![$($crate::to_arg(&$arg)),*],
        )
    };
}
