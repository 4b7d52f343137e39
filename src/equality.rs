//! Structural equality over JSON values.
//!
//! Objects and arrays are compared key by key, with array indices acting as
//! keys. Keys whose value is `null` in the *left* operand are left out of
//! both key sets, so `{a: 1, b: null}` equals `{a: 1}` but not the reverse.
//! Callers that need a symmetric answer must check both directions.

use std::borrow::Cow;

use serde_json::Value;

/// Deep comparison of two JSON values.
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    let (Some(keys_a), Some(keys_b)) = (keys(a), keys(b)) else {
        return strict_equal(a, b);
    };

    // Both sets are filtered on the left operand's null-ness.
    let null_in_a = |key: &str| child(a, key).is_some_and(Value::is_null);
    let keys_a: Vec<_> = keys_a.into_iter().filter(|k| !null_in_a(k.as_ref())).collect();
    let keys_b: Vec<_> = keys_b.into_iter().filter(|k| !null_in_a(k.as_ref())).collect();

    if keys_a.len() != keys_b.len() {
        return false;
    }

    keys_a.iter().all(|key| {
        keys_b.contains(key)
            && match (child(a, key), child(b, key)) {
                (Some(left), Some(right)) => deep_equal(left, right),
                _ => false,
            }
    })
}

/// Key set of an object or array; `None` for scalars.
fn keys(value: &Value) -> Option<Vec<Cow<'_, str>>> {
    match value {
        Value::Object(map) => Some(map.keys().map(|k| Cow::Borrowed(k.as_str())).collect()),
        Value::Array(items) => Some((0..items.len()).map(|i| Cow::Owned(i.to_string())).collect()),
        _ => None,
    }
}

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Type-and-value equality for scalars. Numbers compare as `f64`, since
/// JSON does not distinguish `1` from `1.0`.
fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}
