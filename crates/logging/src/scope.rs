//! crates/logging/src/scope.rs
//! Scope prefix composition.

/// Separator placed between scope segments and the message.
pub const SCOPE_SEPARATOR: &str = " | ";

/// Joins the non-empty segments of `parent` and `own` with [`SCOPE_SEPARATOR`].
///
/// Returns `None` when both segments are absent or empty.
///
/// ```
/// use logging::scope::compose;
///
/// assert_eq!(compose(Some("api"), Some("users")).as_deref(), Some("api | users"));
/// assert_eq!(compose(None, Some("")), None);
/// ```
#[must_use]
pub fn compose(parent: Option<&str>, own: Option<&str>) -> Option<String> {
    let joined = segments(parent, own).collect::<Vec<_>>().join(SCOPE_SEPARATOR);
    (!joined.is_empty()).then_some(joined)
}

/// Prefixes `message` with the non-empty `parent` and `own` scope segments.
///
/// ```
/// use logging::scope::scoped_message;
///
/// assert_eq!(scoped_message(None, None, "hi"), "hi");
/// assert_eq!(scoped_message(None, Some("db"), "hi"), "db | hi");
/// assert_eq!(scoped_message(Some("app"), Some("db"), "hi"), "app | db | hi");
/// ```
#[must_use]
pub fn scoped_message(parent: Option<&str>, own: Option<&str>, message: &str) -> String {
    let mut out = String::new();
    for segment in segments(parent, own) {
        out.push_str(segment);
        out.push_str(SCOPE_SEPARATOR);
    }
    out.push_str(message);
    out
}

fn segments<'a>(parent: Option<&'a str>, own: Option<&'a str>) -> impl Iterator<Item = &'a str> {
    [parent, own]
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
}
