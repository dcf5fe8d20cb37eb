//! Presentation labels for translated vocabulary terms.

use crate::translation::TranslationTable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A translated term as presented to clients.
///
/// `name` is the original term, verbatim. `display_name` is its label in the
/// request language, or the term itself when no translation exists. `count`
/// is reserved for facet cardinality and is null on record fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub name: String,
    pub display_name: String,
    pub count: Option<u64>,
}

impl ValueLabel {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            count: None,
        }
    }

    /// Label a term using a translation table.
    pub fn translated(term: &str, table: &TranslationTable) -> Self {
        Self::new(term, table.display_name(term))
    }

    /// Convert into a JSON object with keys in `name`, `display_name`,
    /// `count` order.
    pub fn into_value(self) -> Value {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(self.name));
        fields.insert("display_name".to_string(), Value::String(self.display_name));
        fields.insert(
            "count".to_string(),
            self.count.map(Value::from).unwrap_or(Value::Null),
        );
        Value::Object(fields)
    }
}

/// Whether an object already has the label shape: a string `name` and a
/// `display_name` key. Such objects are never wrapped again.
pub fn is_label_shaped(fields: &Map<String, Value>) -> bool {
    matches!(fields.get("name"), Some(Value::String(_))) && fields.contains_key("display_name")
}

pub fn value_is_label(value: &Value) -> bool {
    matches!(value, Value::Object(fields) if is_label_shaped(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_value_shape() {
        let label = ValueLabel::new("http://x/term", "Term");
        assert_eq!(
            label.into_value(),
            json!({"name": "http://x/term", "display_name": "Term", "count": null})
        );
    }

    #[test]
    fn test_into_value_with_count() {
        let mut label = ValueLabel::new("a", "A");
        label.count = Some(3);
        assert_eq!(label.into_value()["count"], json!(3));
    }

    #[test]
    fn test_translated_falls_back_to_term() {
        let table: TranslationTable = [("known".to_string(), "Known".to_string())]
            .into_iter()
            .collect();
        assert_eq!(ValueLabel::translated("known", &table).display_name, "Known");
        assert_eq!(
            ValueLabel::translated("unknown", &table).display_name,
            "unknown"
        );
    }

    #[test]
    fn test_label_shape_detection() {
        assert!(value_is_label(&json!({"name": "a", "display_name": "A", "count": null})));
        assert!(value_is_label(&json!({"name": "a", "display_name": null})));
        assert!(!value_is_label(&json!({"name": "a"})));
        assert!(!value_is_label(&json!({"name": null, "display_name": "A"})));
        assert!(!value_is_label(&json!({"display_name": "A"})));
        assert!(!value_is_label(&json!("a")));
    }

    #[test]
    fn test_deserialize_from_json() {
        let label: ValueLabel =
            serde_json::from_value(json!({"name": "a", "display_name": "A", "count": null}))
                .expect("Should deserialize");
        assert_eq!(label, ValueLabel::new("a", "A"));
    }
}
