//! crates/logging-sink/src/writer/render.rs
//! Text rendering helpers for [`WriterConsole`](super::WriterConsole).

use serde_json::Value;

use crate::action::DirOptions;

/// Renders `message` followed by `args`, separated by single spaces.
///
/// String arguments are written raw; every other value is written as compact
/// JSON.
pub(crate) fn render_message(message: &str, args: &[Value]) -> String {
    let mut line = String::from(message);
    for arg in args {
        line.push(' ');
        line.push_str(&render_arg(arg));
    }
    line
}

/// Renders the line reported for a failed assertion.
///
/// An empty message contributes no separator, so arguments follow the colon
/// directly.
pub(crate) fn render_assertion(message: &str, args: &[Value]) -> String {
    let rendered = render_message(message, args);
    let detail = if message.is_empty() {
        rendered.strip_prefix(' ').unwrap_or(&rendered)
    } else {
        &rendered
    };
    if detail.is_empty() {
        "Assertion failed".to_owned()
    } else {
        format!("Assertion failed: {detail}")
    }
}

/// Renders a single value the way it appears in a log line.
pub(crate) fn render_arg(arg: &Value) -> String {
    match arg {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Renders a value for `dir`, abbreviating containers nested deeper than
/// `options.depth`.
pub(crate) fn render_dir(value: &Value, options: &DirOptions) -> String {
    let limited = limit_depth(value, options.depth);
    if options.pretty {
        format!("{limited:#}")
    } else {
        limited.to_string()
    }
}

/// Copies `value`, replacing containers below `depth` nested levels with
/// `"[Object]"` or `"[Array]"`. The top-level container is always kept.
pub(crate) fn limit_depth(value: &Value, depth: Option<usize>) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|item| nested(item, depth)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), nested(item, depth)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn nested(value: &Value, depth: Option<usize>) -> Value {
    match (value, depth) {
        (Value::Array(_), Some(0)) => Value::String("[Array]".to_owned()),
        (Value::Object(_), Some(0)) => Value::String("[Object]".to_owned()),
        _ => limit_depth(value, depth.map(|d| d.saturating_sub(1))),
    }
}

/// Prefixes every line of `text` with `indent` spaces and terminates each
/// line with a newline.
pub(crate) fn indent_lines(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::with_capacity(text.len() + indent + 1);
    for line in text.split('\n') {
        out.push_str(&pad);
        out.push_str(line);
        out.push('\n');
    }
    out
}
