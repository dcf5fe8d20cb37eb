use thiserror::Error;

/// Failure of the term translation lookup.
///
/// This is the only error the translation pipeline surfaces: a missing or
/// partial translation table is not safely substitutable with silence.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("term lookup unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read term translations from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid term translations in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
