//! Collection of the terms a record needs translated.
//!
//! Walks packages, their resources and the resources' access services,
//! following the routing tables, and gathers every atomic vocabulary value
//! so the whole request can be translated with one lookup.

use crate::routing::{nested_children, EntityKind};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

/// An atomic vocabulary value eligible for translation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Text(String),
    /// A numeric value, kept in its JSON text form.
    Number(String),
}

impl Term {
    /// The key this term is looked up and labelled under.
    pub fn as_str(&self) -> &str {
        match self {
            Term::Text(text) => text,
            Term::Number(number) => number,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collect the distinct vocabulary terms of a package or a sequence of
/// packages. Order carries no meaning.
pub fn collect_values_to_translate(data: &Value) -> BTreeSet<Term> {
    let mut terms = BTreeSet::new();
    match data {
        Value::Array(packages) => {
            for package in packages {
                collect_entity(package, EntityKind::Package, &mut terms);
            }
        }
        package => collect_entity(package, EntityKind::Package, &mut terms),
    }

    debug!("Collected {} distinct terms to translate", terms.len());
    terms
}

/// Lookup keys of a collected term set.
pub fn lookup_keys(terms: &BTreeSet<Term>) -> Vec<String> {
    terms.iter().map(|term| term.as_str().to_string()).collect()
}

fn collect_entity(record: &Value, kind: EntityKind, terms: &mut BTreeSet<Term>) {
    let Value::Object(fields) = record else {
        warn!("Skipping non-object {:?} record during term collection", kind);
        return;
    };

    for field in kind.routed_fields() {
        if let Some(value) = fields.get(*field) {
            collect_field(value, field, terms);
        }
    }

    if let Some((key, child_kind)) = kind.children() {
        if let Some(Value::Array(children)) = fields.get(key) {
            for child in children {
                collect_entity(child, child_kind, terms);
            }
        }
    }
}

fn collect_field(value: &Value, field: &str, terms: &mut BTreeSet<Term>) {
    match value {
        Value::String(text) if !text.is_empty() => {
            terms.insert(Term::Text(text.clone()));
        }
        Value::Number(number) => {
            terms.insert(Term::Number(number.to_string()));
        }
        Value::Array(items) => {
            for item in items {
                collect_field(item, field, terms);
            }
        }
        Value::Object(fields) => {
            // Objects only contribute through routed children.
            if let Some(children) = nested_children(field) {
                for child in children {
                    if let Some(child_value) = fields.get(*child) {
                        collect_field(child_value, child, terms);
                    }
                }
            }
        }
        _ => {}
    }
}
