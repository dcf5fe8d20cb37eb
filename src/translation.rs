//! Translation table construction.
//!
//! A request's translation table maps each term to its label in the request
//! language. It is built from a single batched lookup in two languages: the
//! fallback language fills the table first and the preferred language
//! overrides it.

use crate::error::LookupError;
use crate::i18n::DEFAULT_FALLBACK_LANG;
use crate::lookup::TermLookup;
use std::collections::HashMap;
use tracing::debug;

/// Term -> display label for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Label of `term`, or the term itself when it has no translation.
    pub fn display_name<'a>(&'a self, term: &'a str) -> &'a str {
        self.get(term).unwrap_or(term)
    }

    pub fn insert(&mut self, term: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(term.into(), label.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for TranslationTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Build the translation table of `terms` for `lang`.
///
/// Fallback-language (`en`) entries are inserted first, then overwritten by
/// preferred-language entries for the same term. Terms with neither are left
/// out. Lookup failures propagate unchanged.
pub fn get_translations<L: TermLookup + ?Sized>(
    lookup: &L,
    terms: &[String],
    lang: &str,
) -> Result<TranslationTable, LookupError> {
    if terms.is_empty() {
        debug!("No terms to translate, skipping term lookup");
        return Ok(TranslationTable::new());
    }

    let rows = lookup.term_translation_show(terms, (lang, DEFAULT_FALLBACK_LANG))?;

    let mut table = TranslationTable::new();
    for row in rows.iter().filter(|row| row.lang_code == DEFAULT_FALLBACK_LANG) {
        table.insert(row.term.clone(), row.term_translation.clone());
    }
    for row in rows.iter().filter(|row| row.lang_code == lang) {
        table.insert(row.term.clone(), row.term_translation.clone());
    }

    debug!(
        "Built translation table for '{}' with {} of {} terms",
        lang,
        table.len(),
        terms.len()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{InMemoryTermLookup, TermTranslation};
    use std::cell::Cell;

    fn terms(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// Lookup returning fixed rows, in the order given, and counting calls.
    struct FixedLookup {
        rows: Vec<TermTranslation>,
        calls: Cell<usize>,
    }

    impl FixedLookup {
        fn new(rows: &[(&str, &str, &str)]) -> Self {
            Self {
                rows: rows
                    .iter()
                    .map(|(term, translation, lang)| TermTranslation {
                        term: term.to_string(),
                        term_translation: translation.to_string(),
                        lang_code: lang.to_string(),
                    })
                    .collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl TermLookup for FixedLookup {
        fn term_translation_show(
            &self,
            _terms: &[String],
            _lang_codes: (&str, &str),
        ) -> Result<Vec<TermTranslation>, LookupError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.rows.clone())
        }
    }

    struct FailingLookup;

    impl TermLookup for FailingLookup {
        fn term_translation_show(
            &self,
            _terms: &[String],
            _lang_codes: (&str, &str),
        ) -> Result<Vec<TermTranslation>, LookupError> {
            Err(LookupError::Unavailable("database offline".to_string()))
        }
    }

    // ==================== Precedence Tests ====================

    #[test]
    fn test_preferred_overrides_fallback() {
        let lookup = FixedLookup::new(&[("x", "X-en", "en"), ("x", "X-nl", "nl")]);
        let table = get_translations(&lookup, &terms(&["x"]), "nl").expect("Should succeed");
        assert_eq!(table.get("x"), Some("X-nl"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_preferred_wins_regardless_of_row_order() {
        let lookup = FixedLookup::new(&[("x", "X-nl", "nl"), ("x", "X-en", "en")]);
        let table = get_translations(&lookup, &terms(&["x"]), "nl").expect("Should succeed");
        assert_eq!(table.get("x"), Some("X-nl"));
    }

    #[test]
    fn test_fallback_kept_when_preferred_missing() {
        let lookup = FixedLookup::new(&[("x", "X-en", "en"), ("y", "Y-nl", "nl")]);
        let table =
            get_translations(&lookup, &terms(&["x", "y", "z"]), "nl").expect("Should succeed");
        assert_eq!(table.get("x"), Some("X-en"));
        assert_eq!(table.get("y"), Some("Y-nl"));
        assert_eq!(table.get("z"), None);
        assert_eq!(table.display_name("z"), "z");
    }

    #[test]
    fn test_rows_in_other_languages_are_ignored() {
        let lookup = FixedLookup::new(&[("x", "X-de", "de")]);
        let table = get_translations(&lookup, &terms(&["x"]), "nl").expect("Should succeed");
        assert!(table.is_empty());
    }

    #[test]
    fn test_english_request() {
        let lookup = FixedLookup::new(&[("x", "X-en", "en")]);
        let table = get_translations(&lookup, &terms(&["x"]), "en").expect("Should succeed");
        assert_eq!(table.get("x"), Some("X-en"));
    }

    // ==================== Lookup Interaction Tests ====================

    #[test]
    fn test_single_lookup_call() {
        let lookup = FixedLookup::new(&[]);
        get_translations(&lookup, &terms(&["a", "b", "c"]), "nl").expect("Should succeed");
        assert_eq!(lookup.calls.get(), 1);
    }

    #[test]
    fn test_empty_terms_skip_lookup() {
        let lookup = FixedLookup::new(&[("x", "X-en", "en")]);
        let table = get_translations(&lookup, &[], "nl").expect("Should succeed");
        assert!(table.is_empty());
        assert_eq!(lookup.calls.get(), 0);
    }

    #[test]
    fn test_lookup_failure_propagates() {
        let result = get_translations(&FailingLookup, &terms(&["x"]), "nl");
        assert!(matches!(result, Err(LookupError::Unavailable(_))));
    }

    #[test]
    fn test_with_in_memory_lookup() {
        let mut lookup = InMemoryTermLookup::new();
        lookup.insert("x", "en", "X-en");
        lookup.insert("x", "nl", "X-nl");
        let table = get_translations(&lookup, &terms(&["x"]), "nl").expect("Should succeed");
        assert_eq!(table.get("x"), Some("X-nl"));
    }
}
