//! Request-level translation flows.
//!
//! Each call handles one request: resolve the language hint, collect the
//! terms, build the translation table with a single lookup, then transform.
//! Nothing is shared between calls except the lookup and the language
//! settings.

use crate::collector::{collect_values_to_translate, lookup_keys};
use crate::error::LookupError;
use crate::facets::{collect_facet_terms, replace_search_facets};
use crate::i18n::LanguageSettings;
use crate::lookup::TermLookup;
use crate::transform::RecordTransformer;
use crate::translation::get_translations;
use serde_json::{Map, Value};
use tracing::{debug, warn};

const RESULTS_KEY: &str = "results";
const SEARCH_FACETS_KEY: &str = "search_facets";

/// Translates dataset records and search results for portal clients.
pub struct MetadataTranslator<L> {
    lookup: L,
    languages: LanguageSettings,
}

impl<L: TermLookup> MetadataTranslator<L> {
    pub fn new(lookup: L, languages: LanguageSettings) -> Self {
        Self { lookup, languages }
    }

    pub fn languages(&self) -> &LanguageSettings {
        &self.languages
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Translate a single package or a sequence of packages (the dataset
    /// "show" flow). The output has the input's shape.
    pub fn translate_records(
        &self,
        records: Value,
        lang_hint: Option<&str>,
    ) -> Result<Value, LookupError> {
        let lang = self.languages.resolve(lang_hint);
        let terms = collect_values_to_translate(&records);
        let table = get_translations(&self.lookup, &lookup_keys(&terms), &lang)?;

        debug!("Translating records into '{}'", lang);
        Ok(RecordTransformer::new(&table, &lang).transform(records))
    }

    /// Translate a search result (the dataset "search" flow): every package
    /// under `results` and, when present, the `search_facets` summary.
    ///
    /// Record terms and facet item names are looked up in one batch.
    pub fn translate_search_result(
        &self,
        mut result: Value,
        lang_hint: Option<&str>,
    ) -> Result<Value, LookupError> {
        let lang = self.languages.resolve(lang_hint);
        let Value::Object(fields) = &mut result else {
            warn!("Search result is not an object, returning it untranslated");
            return Ok(result);
        };

        let mut terms = fields
            .get(RESULTS_KEY)
            .map(collect_values_to_translate)
            .unwrap_or_default();
        if let Some(Value::Object(facets)) = fields.get(SEARCH_FACETS_KEY) {
            terms.extend(collect_facet_terms(facets));
        }
        let table = get_translations(&self.lookup, &lookup_keys(&terms), &lang)?;
        let transformer = RecordTransformer::new(&table, &lang);

        if let Some(results) = fields.get_mut(RESULTS_KEY) {
            let packages = results.take();
            *results = transformer.transform(packages);
        }
        if let Some(Value::Object(facets)) = fields.get_mut(SEARCH_FACETS_KEY) {
            replace_search_facets(facets, &table, &lang, &self.lookup)?;
        }

        debug!("Translated search result into '{}'", lang);
        Ok(result)
    }

    /// Translate a facet summary on its own, looking up its item names.
    pub fn translate_facets(
        &self,
        facets: &mut Map<String, Value>,
        lang_hint: Option<&str>,
    ) -> Result<(), LookupError> {
        let lang = self.languages.resolve(lang_hint);
        let terms = collect_facet_terms(facets);
        let table = get_translations(&self.lookup, &lookup_keys(&terms), &lang)?;
        replace_search_facets(facets, &table, &lang, &self.lookup)
    }
}
