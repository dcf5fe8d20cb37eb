//! Language resolution: turn a raw language hint into a supported code.
//!
//! Hints arrive as `Accept-Language`-style header values. Only the first
//! listed tag is considered; quality weights are ignored, so
//! `"fr;q=0.9, nl;q=0.5"` resolves through `fr`, not `nl`.

use crate::i18n::LanguageRegistry;
use std::collections::BTreeSet;
use tracing::warn;

/// Language every lookup and cascade falls back to.
pub const DEFAULT_FALLBACK_LANG: &str = "en";

/// Normalize a raw language hint to its lowercase primary subtag.
///
/// Returns `None` when nothing usable is left.
///
/// # Example
/// ```ignore
/// assert_eq!(normalize_language_tag("nl-BE;q=0.9, en;q=0.8"), Some("nl".to_string()));
/// ```
pub fn normalize_language_tag(raw: &str) -> Option<String> {
    let tag = raw.trim();
    let tag = tag.split(';').next().unwrap_or_default();
    let tag = tag.split(',').next().unwrap_or_default();
    let tag = tag.trim().replace('_', "-");
    let primary = tag.split('-').next().unwrap_or_default().trim().to_lowercase();

    if primary.is_empty() {
        None
    } else {
        Some(primary)
    }
}

/// Resolve a language hint against the supported set.
///
/// An unusable hint (missing, blank, only separators) resolves to the
/// configured default; a code outside `supported` resolves to `fallback`.
/// Never fails.
pub fn resolve_language(
    hint: Option<&str>,
    supported: &BTreeSet<String>,
    fallback: &str,
    configured_default: &str,
) -> String {
    let code = match hint.and_then(normalize_language_tag) {
        Some(code) => code,
        None => {
            warn!(
                "Language hint {:?} has no usable language code, using configured default '{}'",
                hint, configured_default
            );
            normalize_language_tag(configured_default).unwrap_or_else(|| fallback.to_string())
        }
    };

    if supported.contains(&code) {
        code
    } else {
        fallback.to_string()
    }
}

/// Languages a deployment serves and the default used for unusable hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSettings {
    pub supported: BTreeSet<String>,
    pub default_language: String,
}

impl LanguageSettings {
    pub fn new<I, S>(supported: I, default_language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported: supported.into_iter().map(Into::into).collect(),
            default_language: default_language.into(),
        }
    }

    /// Resolve a request's language hint to the code used for this request.
    pub fn resolve(&self, hint: Option<&str>) -> String {
        resolve_language(
            hint,
            &self.supported,
            DEFAULT_FALLBACK_LANG,
            &self.default_language,
        )
    }
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            supported: LanguageRegistry::get().enabled_codes(),
            default_language: DEFAULT_FALLBACK_LANG.to_string(),
        }
    }
}
