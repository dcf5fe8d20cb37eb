//! Record transformation: raw dataset records into client records.
//!
//! Every record goes through three passes, in order:
//!
//! 1. **Language collapsing.** `<field>_translated` maps and the fixed
//!    language-value fields are reduced to a single value with the language
//!    cascade. Runs post-order over the whole tree.
//! 2. **Tag normalization.** `tags` becomes a list of plain strings, with the
//!    request-language entries of `tags_translated` merged in.
//! 3. **Vocabulary translation.** Routed fields are replaced by labels,
//!    following the nested routing table into sub-objects.
//!
//! Resources and their access services receive passes 2 and 3 with their own
//! routing tables. Malformed values are passed through or dropped with a
//! warning; a transformation never fails.

use crate::i18n::{select_value, DEFAULT_FALLBACK_LANG};
use crate::label::{is_label_shaped, value_is_label, ValueLabel};
use crate::routing::{
    nested_children, EntityKind, LANGUAGE_VALUE_FIELDS, TAGS_FIELD, TRANSLATED_SUFFIX,
};
use crate::translation::TranslationTable;
use serde_json::{Map, Value};
use tracing::warn;

/// Applies the three transformation passes for one request.
pub struct RecordTransformer<'a> {
    table: &'a TranslationTable,
    lang: &'a str,
    fallback: &'a str,
}

impl<'a> RecordTransformer<'a> {
    pub fn new(table: &'a TranslationTable, lang: &'a str) -> Self {
        Self {
            table,
            lang,
            fallback: DEFAULT_FALLBACK_LANG,
        }
    }

    /// Transform a single package or a sequence of packages, keeping the
    /// input's shape.
    pub fn transform(&self, data: Value) -> Value {
        match data {
            Value::Array(packages) => Value::Array(
                packages
                    .into_iter()
                    .map(|package| self.transform_package(package))
                    .collect(),
            ),
            package => self.transform_package(package),
        }
    }

    pub fn transform_package(&self, mut package: Value) -> Value {
        collapse_translated(&mut package, self.lang, self.fallback);
        match &mut package {
            Value::Object(fields) => self.normalize_entity(fields, EntityKind::Package),
            other => warn!("Passing through non-object package {}", other),
        }
        package
    }

    fn normalize_entity(&self, fields: &mut Map<String, Value>, kind: EntityKind) {
        normalize_tags(fields, self.lang, self.fallback);
        self.translate_fields(fields, kind.routed_fields());

        if let Some((key, child_kind)) = kind.children() {
            if let Some(Value::Array(children)) = fields.get_mut(key) {
                for child in children.iter_mut() {
                    match child {
                        Value::Object(child_fields) => self.normalize_entity(child_fields, child_kind),
                        other => warn!("Passing through non-object entry in '{}': {}", key, other),
                    }
                }
            }
        }
    }

    /// Pass 3 over one entity. Absent fields stay absent; present but empty
    /// fields become null.
    fn translate_fields(&self, fields: &mut Map<String, Value>, routed: &[&str]) {
        for field in routed {
            let Some(value) = fields.get_mut(*field) else {
                continue;
            };
            let current = value.take();
            *value = if is_empty(&current) {
                Value::Null
            } else if nested_children(field).is_some() {
                self.translate_nested(current, field)
            } else {
                self.translate_term(current, true)
            };
        }
    }

    /// Translate a value of a nested routed field, descending into its routed
    /// children and leaving every other key untouched.
    fn translate_nested(&self, value: Value, field: &str) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.translate_nested(item, field))
                    .collect(),
            ),
            label if value_is_label(&label) => label,
            Value::Object(mut fields) => {
                for child in nested_children(field).unwrap_or_default() {
                    let Some(child_value) = fields.get_mut(*child) else {
                        continue;
                    };
                    let current = child_value.take();
                    *child_value = if nested_children(child).is_some() {
                        self.translate_nested(current, child)
                    } else {
                        self.translate_term(current, false)
                    };
                }
                Value::Object(fields)
            }
            leaf => self.translate_term(leaf, false),
        }
    }

    /// Translate a term position: strings become labels, lists are mapped
    /// element-wise, labels are kept. Numbers become labels only at the top
    /// level of a plain routed field.
    fn translate_term(&self, value: Value, label_numbers: bool) -> Value {
        match value {
            Value::String(term) if term.is_empty() => Value::Null,
            Value::String(term) => ValueLabel::translated(&term, self.table).into_value(),
            Value::Number(number) if label_numbers => {
                ValueLabel::translated(&number.to_string(), self.table).into_value()
            }
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.translate_term(item, label_numbers))
                    .collect(),
            ),
            Value::Object(fields) => {
                if !is_label_shaped(&fields) {
                    warn!("Passing through unexpected object at a term position");
                }
                Value::Object(fields)
            }
            other => other,
        }
    }
}

/// Translate a package (or sequence of packages) with a prebuilt table.
pub fn replace_package(data: Value, table: &TranslationTable, lang: &str) -> Value {
    RecordTransformer::new(table, lang).transform(data)
}

/// Null, empty strings and empty collections.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

// ==================== Pass 1: language collapsing ====================

/// Collapse language-tagged maps throughout `value`, children first.
fn collapse_translated(value: &mut Value, preferred: &str, fallback: &str) {
    match value {
        Value::Array(items) => {
            for item in items.iter_mut() {
                collapse_translated(item, preferred, fallback);
            }
        }
        Value::Object(fields) => {
            for child in fields.values_mut() {
                collapse_translated(child, preferred, fallback);
            }
            collapse_level(fields, preferred, fallback);
        }
        _ => {}
    }
}

fn collapse_level(fields: &mut Map<String, Value>, preferred: &str, fallback: &str) {
    let translated_keys: Vec<String> = fields
        .keys()
        .filter(|key| key.len() > TRANSLATED_SUFFIX.len() && key.ends_with(TRANSLATED_SUFFIX))
        .cloned()
        .collect();

    for key in translated_keys {
        let base = &key[..key.len() - TRANSLATED_SUFFIX.len()];
        let Some(Value::Object(translated)) = fields.get(&key) else {
            continue;
        };
        if is_label_shaped(translated) {
            continue;
        }

        let values = match fields.get(base) {
            // Lists such as tags are never collapsed to a scalar.
            Some(Value::Array(_)) => continue,
            Some(Value::Object(existing)) if !is_label_shaped(existing) => {
                let mut merged = translated.clone();
                for (lang, value) in existing {
                    merged.insert(lang.clone(), value.clone());
                }
                merged
            }
            _ => translated.clone(),
        };

        let selected = select_value(&values, preferred, fallback);
        fields.insert(base.to_string(), selected);
    }

    for field in LANGUAGE_VALUE_FIELDS {
        let selected = match fields.get(*field) {
            Some(Value::Object(values)) if !is_label_shaped(values) => {
                select_value(values, preferred, fallback)
            }
            _ => continue,
        };
        fields.insert(field.to_string(), selected);
    }
}

// ==================== Pass 2: tag normalization ====================

fn normalize_tags(fields: &mut Map<String, Value>, preferred: &str, fallback: &str) {
    let Some(tags) = fields.get_mut(TAGS_FIELD) else {
        return;
    };

    let mut names: Vec<String> = match tags.take() {
        Value::Array(items) => items.into_iter().filter_map(tag_name).collect(),
        Value::Null => Vec::new(),
        single => tag_name(single).into_iter().collect(),
    };

    let translated_key = format!("{}{}", TAGS_FIELD, TRANSLATED_SUFFIX);
    if let Some(Value::Object(translated)) = fields.get(&translated_key) {
        if let Value::Array(extra) = select_value(translated, preferred, fallback) {
            for name in extra.into_iter().filter_map(tag_name) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
    }

    fields.insert(
        TAGS_FIELD.to_string(),
        Value::Array(names.into_iter().map(Value::String).collect()),
    );
}

/// Plain-string form of one tag: the string itself, or an object's `name`,
/// or its `display_name`.
fn tag_name(tag: Value) -> Option<String> {
    match tag {
        Value::String(name) => Some(name),
        Value::Object(fields) => {
            let name = fields
                .get("name")
                .and_then(Value::as_str)
                .or_else(|| fields.get("display_name").and_then(Value::as_str))
                .map(str::to_string);
            if name.is_none() {
                let tag = Value::Object(fields);
                warn!("Dropping tag without a name: {}", tag);
            }
            name
        }
        other => {
            warn!("Dropping malformed tag: {}", other);
            None
        }
    }
}
