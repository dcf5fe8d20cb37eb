//! Internationalization (i18n) support for metadata translation.
//!
//! # Architecture
//!
//! - `registry`: the languages the portal knows and which of them are enabled
//! - `language`: normalization and resolution of request language hints
//! - `cascade`: selection of one value out of a language-tagged map
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{select_value, LanguageSettings};
//!
//! let settings = LanguageSettings::default();
//! let lang = settings.resolve(Some("nl-BE;q=0.9, en;q=0.8"));
//! let title = select_value(&title_translated, &lang, DEFAULT_FALLBACK_LANG);
//! ```

mod cascade;
mod language;
mod registry;

pub use cascade::{has_content, select_value};
pub use language::{
    normalize_language_tag, resolve_language, LanguageSettings, DEFAULT_FALLBACK_LANG,
};
pub use registry::{LanguageConfig, LanguageRegistry};
