//! crates/logging/src/args.rs
//! Conversion of caller values into queued arguments.

use serde::Serialize;
use serde_json::Value;

/// Converts `value` into the JSON value stored in a queued action.
///
/// Values whose `Serialize` implementation fails (for example maps with
/// non-string keys) are logged as `null` and the failure is reported through
/// `tracing`.
///
/// ```
/// use logging::to_arg;
/// use serde_json::json;
///
/// assert_eq!(to_arg(&("id", 7)), json!(["id", 7]));
/// assert_eq!(to_arg("plain"), json!("plain"));
/// ```
pub fn to_arg<T>(value: &T) -> Value
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).unwrap_or_else(|error| {
        tracing::warn!(target: "grouplog::args", %error, "argument could not be serialized; logging null");
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn plain_values_convert_structurally() {
        assert_eq!(to_arg(&3_u8), json!(3));
        assert_eq!(to_arg(&Some("x")), json!("x"));
        assert_eq!(to_arg(&vec![1, 2]), json!([1, 2]));
        assert_eq!(to_arg(&()), Value::Null);
    }

    #[test]
    fn unserializable_map_keys_become_null() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "pair");
        assert_eq!(to_arg(&map), Value::Null);
    }
}
