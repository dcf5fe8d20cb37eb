//! Search facet translation.
//!
//! Facet titles are translated with their own single-term lookup; facet item
//! names are labelled from the request's translation table. Facets are
//! independent of each other.

use crate::collector::Term;
use crate::error::LookupError;
use crate::lookup::TermLookup;
use crate::translation::{get_translations, TranslationTable};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::warn;

const TITLE_KEY: &str = "title";
const ITEMS_KEY: &str = "items";

/// Translate one facet in place.
///
/// The title is looked up when it is a non-empty string. Every item with a
/// string `name` gets a `display_name`; other items are kept as they are.
pub fn translate_facet<L: TermLookup + ?Sized>(
    facet: &mut Map<String, Value>,
    translations: &TranslationTable,
    lang: &str,
    lookup: &L,
) -> Result<(), LookupError> {
    if let Some(Value::String(title)) = facet.get_mut(TITLE_KEY) {
        if !title.is_empty() {
            let title_table = get_translations(lookup, std::slice::from_ref(&*title), lang)?;
            if let Some(translated) = title_table.get(title.as_str()) {
                *title = translated.to_string();
            }
        }
    }

    match facet.get_mut(ITEMS_KEY) {
        Some(Value::Array(items)) => {
            for item in items.iter_mut() {
                label_item(item, translations);
            }
        }
        Some(other) => warn!("Leaving facet items untranslated, not a list: {}", other),
        None => {}
    }
    Ok(())
}

fn label_item(item: &mut Value, translations: &TranslationTable) {
    let Value::Object(fields) = item else {
        warn!("Skipping malformed facet item: {}", item);
        return;
    };
    let display_name = match fields.get("name") {
        Some(Value::String(name)) => translations.display_name(name).to_string(),
        _ => {
            warn!(
                "Skipping facet item without a string name: {:?}",
                fields.get("name")
            );
            return;
        }
    };
    fields.insert("display_name".to_string(), Value::String(display_name));
}

/// Translate every facet of a search facet summary in place.
///
/// Entries that are not objects are left as they are.
pub fn replace_search_facets<L: TermLookup + ?Sized>(
    facets: &mut Map<String, Value>,
    translations: &TranslationTable,
    lang: &str,
    lookup: &L,
) -> Result<(), LookupError> {
    for (key, value) in facets.iter_mut() {
        match value {
            Value::Object(facet) => translate_facet(facet, translations, lang, lookup)?,
            other => warn!("Leaving malformed search facet '{}' untranslated: {}", key, other),
        }
    }
    Ok(())
}

/// Item names of every facet, so they can share the request's lookup with
/// the record terms.
pub fn collect_facet_terms(facets: &Map<String, Value>) -> BTreeSet<Term> {
    facets
        .values()
        .filter_map(|facet| facet.get(ITEMS_KEY).and_then(Value::as_array))
        .flatten()
        .filter_map(|item| item.get("name").and_then(Value::as_str))
        .filter(|name| !name.is_empty())
        .map(|name| Term::Text(name.to_string()))
        .collect()
}
