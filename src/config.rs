use crate::i18n::{
    normalize_language_tag, LanguageRegistry, LanguageSettings, DEFAULT_FALLBACK_LANG,
};
use anyhow::{bail, Result};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Config {
    // Languages
    pub default_language: String,
    pub supported_languages: BTreeSet<String>,

    // Term translations seed (JSON array of term translation rows)
    pub term_translations_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let supported_languages = match std::env::var("SUPPORTED_LANGUAGES") {
            Ok(raw) => {
                let codes = parse_language_list(&raw);
                if codes.is_empty() {
                    bail!("SUPPORTED_LANGUAGES must list at least one language code");
                }
                codes
            }
            Err(_) => LanguageRegistry::get().enabled_codes(),
        };

        Ok(Self {
            // Languages
            default_language: std::env::var("LOCALE_DEFAULT")
                .unwrap_or_else(|_| DEFAULT_FALLBACK_LANG.to_string()),
            supported_languages,

            // Term translations
            term_translations_file: std::env::var("TERM_TRANSLATIONS_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty()),
        })
    }

    pub fn language_settings(&self) -> LanguageSettings {
        LanguageSettings::new(
            self.supported_languages.iter().cloned(),
            self.default_language.clone(),
        )
    }
}

/// Parse a comma-separated list of language codes, normalizing each one.
fn parse_language_list(raw: &str) -> BTreeSet<String> {
    raw.split(',').filter_map(normalize_language_tag).collect()
}
