//! Language registry: single source of truth for the languages the portal knows.
//!
//! The registry is a lazily initialised `OnceLock` singleton. It supplies the
//! default set of supported languages when no explicit configuration is given.

use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Configuration for a known language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "nl")
    pub code: &'static str,

    /// Whether requests may select this language
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Codes of all enabled languages, as the supported set used for
    /// language resolution.
    pub fn enabled_codes(&self) -> BTreeSet<String> {
        self.list_enabled()
            .into_iter()
            .map(|lang| lang.code.to_string())
            .collect()
    }
}

/// Languages known to the portal. English is the fallback language and Dutch
/// the second catalogue language. The rest are registered for vocabularies
/// that ship them but are not selectable by default.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            enabled: true,
        },
        LanguageConfig {
            code: "nl",
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            enabled: false,
        },
        LanguageConfig {
            code: "fr",
            enabled: false,
        },
        LanguageConfig {
            code: "es",
            enabled: false,
        },
        LanguageConfig {
            code: "it",
            enabled: false,
        },
    ]
}
