//! Total extraction helpers over loose snapshot documents.
//!
//! Snapshots are best-effort captures of evolving live state, so every
//! read here is total: a missing key, a wrong shape or a mistyped value
//! yields the caller's default instead of an error.

use serde_json::Value;

/// Look up `key` in a map value. `None` for non-maps and missing keys.
pub fn get<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.as_object().and_then(|map| map.get(key))
}

/// Follow a chain of map keys. `None` as soon as any segment is missing.
pub fn get_path<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(doc, |node, key| get(node, key))
}

/// A value as a sequence; the empty slice for anything else.
pub fn seq(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// A value as a string, with a default.
pub fn str_or(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// A value coerced to an integer (i64, u64 or f64), with a default.
pub fn int_or(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(default),
        _ => default,
    }
}

/// An identifier stringified the way the live game compares ids: strings
/// pass through, numbers render in decimal, everything else is absent.
pub fn id_str(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
