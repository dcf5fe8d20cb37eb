//! Term translation lookup.
//!
//! The pipeline never stores translations itself. It asks a `TermLookup` for
//! every stored translation of a batch of terms in two languages, once per
//! request. `InMemoryTermLookup` serves that contract from a vocabulary seed
//! loaded into memory.

use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// One stored translation of a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermTranslation {
    pub term: String,
    pub term_translation: String,
    pub lang_code: String,
}

/// Bulk term-to-label lookup keyed by (term, language code).
pub trait TermLookup {
    /// Return the stored translations of `terms` in either language of
    /// `lang_codes` (preferred, fallback). Terms without a translation are
    /// simply absent from the result.
    fn term_translation_show(
        &self,
        terms: &[String],
        lang_codes: (&str, &str),
    ) -> Result<Vec<TermTranslation>, LookupError>;
}

impl<T: TermLookup + ?Sized> TermLookup for &T {
    fn term_translation_show(
        &self,
        terms: &[String],
        lang_codes: (&str, &str),
    ) -> Result<Vec<TermTranslation>, LookupError> {
        (**self).term_translation_show(terms, lang_codes)
    }
}

/// In-memory term translation store: term -> language -> translation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTermLookup {
    translations: HashMap<String, HashMap<String, String>>,
}

impl InMemoryTermLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from translation rows. Later rows replace earlier rows
    /// for the same (term, language).
    pub fn from_rows(rows: impl IntoIterator<Item = TermTranslation>) -> Self {
        let mut lookup = Self::new();
        for row in rows {
            lookup.insert(row.term, row.lang_code, row.term_translation);
        }
        lookup
    }

    /// Load a JSON array of `TermTranslation` rows.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LookupError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let rows: Vec<TermTranslation> =
            serde_json::from_str(&raw).map_err(|source| LookupError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let lookup = Self::from_rows(rows);
        info!(
            "Loaded {} term translations from {}",
            lookup.len(),
            path.display()
        );
        Ok(lookup)
    }

    pub fn insert(
        &mut self,
        term: impl Into<String>,
        lang_code: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.translations
            .entry(term.into())
            .or_default()
            .insert(lang_code.into(), translation.into());
    }

    /// Number of stored (term, language) translations.
    pub fn len(&self) -> usize {
        self.translations.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TermLookup for InMemoryTermLookup {
    fn term_translation_show(
        &self,
        terms: &[String],
        lang_codes: (&str, &str),
    ) -> Result<Vec<TermTranslation>, LookupError> {
        let (preferred, fallback) = lang_codes;
        let languages: Vec<&str> = if preferred == fallback {
            vec![preferred]
        } else {
            vec![preferred, fallback]
        };

        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        for term in terms.iter().filter(|term| seen.insert(*term)) {
            let Some(by_language) = self.translations.get(term) else {
                continue;
            };
            for lang_code in &languages {
                if let Some(translation) = by_language.get(*lang_code) {
                    rows.push(TermTranslation {
                        term: term.clone(),
                        term_translation: translation.clone(),
                        lang_code: lang_code.to_string(),
                    });
                }
            }
        }

        debug!(
            "Term lookup for {} terms in ({}, {}) returned {} rows",
            terms.len(),
            preferred,
            fallback,
            rows.len()
        );
        Ok(rows)
    }
}
