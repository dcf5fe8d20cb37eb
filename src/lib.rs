//! Language-aware translation and normalization of dataset metadata.
//!
//! Takes dataset records as produced by the catalogue's search and show
//! actions and turns them into client records: vocabulary terms become
//! `{name, display_name, count}` labels, multilingual free text collapses to
//! one string in the request language, and tags become plain strings.
//!
//! ```rust,ignore
//! use dataset_translation::{InMemoryTermLookup, LanguageSettings, MetadataTranslator};
//!
//! let translator = MetadataTranslator::new(lookup, LanguageSettings::default());
//! let client_record = translator.translate_records(raw_record, Some("nl-BE,nl;q=0.9"))?;
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod facets;
pub mod i18n;
pub mod label;
pub mod lookup;
pub mod pipeline;
pub mod routing;
pub mod transform;
pub mod translation;

pub use error::LookupError;
pub use i18n::LanguageSettings;
pub use label::ValueLabel;
pub use lookup::{InMemoryTermLookup, TermLookup, TermTranslation};
pub use pipeline::MetadataTranslator;
pub use translation::TranslationTable;
