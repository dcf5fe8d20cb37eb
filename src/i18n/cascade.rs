//! Language cascade: pick one value out of a language-tagged map.

use serde_json::{Map, Value};

/// Whether a value carries usable content.
///
/// Null, blank strings and empty collections are empty; numbers and booleans
/// always count as content.
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Select a single value from a language-tagged map.
///
/// Resolution order: the preferred language, then the fallback language,
/// then the first stored value with content, then the first stored value
/// whatever it holds. An empty map yields an empty string.
pub fn select_value(values: &Map<String, Value>, preferred: &str, fallback: &str) -> Value {
    [preferred, fallback]
        .iter()
        .filter_map(|lang| values.get(*lang))
        .find(|value| has_content(value))
        .or_else(|| values.values().find(|value| has_content(value)))
        .or_else(|| values.values().next())
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}
